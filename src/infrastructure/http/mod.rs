//! HTTP Layer - Web API
//!
//! - GET  /              前端页面
//! - GET  /get_settings  当前音色设置
//! - POST /synthesize    合成语音

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
