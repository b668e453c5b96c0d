//! Query Handlers 实现

mod settings_handlers;

pub use settings_handlers::*;
