use crate::annotate::{AnnotatedLine, LayoutMode};
use crate::app::mode::AppMode;

/// Transient message shown on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Warning(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Warning(text) => text,
        }
    }
}

/// Snapshot of everything the UI draws for one frame
pub struct RenderState {
    pub mode: AppMode,
    pub layout_mode: LayoutMode,
    pub lines: Vec<AnnotatedLine>,
    pub input: String,
    /// Cursor `(row, column)` within the input area.
    pub cursor: (usize, usize),
    pub command_line: String,
    pub status: Option<StatusMessage>,
}
