//! Infrastructure Layer - 基础设施层
//!
//! - http: HTTP API
//! - adapters: 分句、SSML 生成、语音合成客户端
//! - persistence: 设置 JSON 文件存储
//! - memory: 内存设置存储

pub mod adapters;
pub mod http;
pub mod memory;
pub mod persistence;
