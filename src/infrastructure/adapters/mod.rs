//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod markup;
pub mod segmenter;
pub mod tts;

pub use markup::*;
pub use segmenter::*;
pub use tts::*;
