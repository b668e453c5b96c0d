//! 合成流水线阶段
//!
//! Received → SettingsResolved → Splitting →
//! 对每个块 i: GeneratingMarkup(i) → Synthesizing(i) → Appending(i) → Completed
//!
//! 任一阶段出错即终止（以 `Err` 表示），不返回部分音频

use std::fmt;

/// 流水线阶段，块序号从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Received,
    SettingsResolved,
    Splitting,
    GeneratingMarkup { chunk_index: usize },
    Synthesizing { chunk_index: usize },
    Appending { chunk_index: usize },
    Completed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Received => write!(f, "received"),
            PipelineStage::SettingsResolved => write!(f, "settings_resolved"),
            PipelineStage::Splitting => write!(f, "splitting"),
            PipelineStage::GeneratingMarkup { chunk_index } => {
                write!(f, "generating_markup({})", chunk_index)
            }
            PipelineStage::Synthesizing { chunk_index } => write!(f, "synthesizing({})", chunk_index),
            PipelineStage::Appending { chunk_index } => write!(f, "appending({})", chunk_index),
            PipelineStage::Completed => write!(f, "completed"),
        }
    }
}
