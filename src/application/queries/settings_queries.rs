//! Settings Queries

/// 获取当前音色设置查询
#[derive(Debug, Clone)]
pub struct GetSettings;
