//! Memory Layer - In-Memory State Management
//!
//! 不落盘的设置存储实现

mod settings_store;

pub use settings_store::InMemorySettingsStore;
