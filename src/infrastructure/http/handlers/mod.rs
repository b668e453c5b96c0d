//! HTTP Handlers

mod settings;
mod synthesize;

pub use settings::*;
pub use synthesize::*;
