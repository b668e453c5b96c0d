//! JSON 文件存储

mod settings_store;

pub use settings_store::JsonFileSettingsStore;
