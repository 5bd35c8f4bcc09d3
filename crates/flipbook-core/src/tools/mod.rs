//! Tool and color mode.
//!
//! The active tool and the last picked color share a single value: picking a
//! color replaces the tool state, and opening a picker is itself a state.

use crate::path::Rgb;
use serde::{Deserialize, Serialize};

/// Tool/color mode of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolMode {
    /// Nothing picked yet; pointer input is ignored.
    #[default]
    Uninitialized,
    Pencil,
    Eraser,
    /// The shape picker is being shown.
    ToolsMenuOpen,
    /// The color picker is being shown.
    ColorsMenuOpen,
    Rectangle,
    Circle,
    Line,
    White,
    Red,
    Black,
    Blue,
}

/// Geometry rule used by the path builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawingTool {
    Pencil,
    Eraser,
    Line,
    Rectangle,
    Circle,
}

impl ToolMode {
    /// Whether a picker is open. Drawing is ignored in these states.
    pub fn is_menu_open(self) -> bool {
        matches!(self, ToolMode::ToolsMenuOpen | ToolMode::ColorsMenuOpen)
    }

    /// Whether this mode is one of the palette colors.
    pub fn is_color(self) -> bool {
        self.palette_color().is_some()
    }

    /// Whether this mode is one of the shape tools.
    pub fn is_shape(self) -> bool {
        matches!(self, ToolMode::Rectangle | ToolMode::Circle | ToolMode::Line)
    }

    /// The geometry rule pointer input maps to, or `None` when drawing is disabled.
    ///
    /// A color state draws like the pencil: a color pick hands control back
    /// to freehand drawing in the chosen color.
    pub fn drawing_tool(self) -> Option<DrawingTool> {
        match self {
            ToolMode::Uninitialized | ToolMode::ToolsMenuOpen | ToolMode::ColorsMenuOpen => None,
            ToolMode::Pencil | ToolMode::White | ToolMode::Red | ToolMode::Black | ToolMode::Blue => {
                Some(DrawingTool::Pencil)
            }
            ToolMode::Eraser => Some(DrawingTool::Eraser),
            ToolMode::Rectangle => Some(DrawingTool::Rectangle),
            ToolMode::Circle => Some(DrawingTool::Circle),
            ToolMode::Line => Some(DrawingTool::Line),
        }
    }

    /// The palette color of a color state.
    pub fn palette_color(self) -> Option<Rgb> {
        match self {
            ToolMode::White => Some(Rgb::WHITE),
            ToolMode::Red => Some(Rgb::RED),
            ToolMode::Black => Some(Rgb::BLACK),
            ToolMode::Blue => Some(Rgb::BLUE),
            _ => None,
        }
    }
}
