//! User actions consumed by the session reducer.

use crate::input::PointerInput;
use crate::path::Rgb;
use crate::tools::ToolMode;
use serde::{Deserialize, Serialize};

/// A discrete user intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Pointer sample on the drawing surface.
    Draw(PointerInput),
    Undo,
    /// Redo one undone entry.
    Restore,
    DeleteFrame,
    CreateFrame,
    CopyFrame,
    DeleteAllFrames,
    Play,
    Stop,
    /// A tool (or a picker) was chosen.
    SelectTool(ToolMode),
    /// The color picker closed. `color` is `None` when it was dismissed
    /// without a pick.
    SelectColor { tool: ToolMode, color: Option<Rgb> },
}

impl Action {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Draw(_) => "draw",
            Action::Undo => "undo",
            Action::Restore => "restore",
            Action::DeleteFrame => "delete-frame",
            Action::CreateFrame => "create-frame",
            Action::CopyFrame => "copy-frame",
            Action::DeleteAllFrames => "delete-all-frames",
            Action::Play => "play",
            Action::Stop => "stop",
            Action::SelectTool(_) => "select-tool",
            Action::SelectColor { .. } => "select-color",
        }
    }
}
