//! Published view state.

use crate::frames::Frame;
use crate::path::{PathEntry, Rgb};
use crate::tools::ToolMode;
use serde::{Deserialize, Serialize};

/// State of the canvas while the user edits the current frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditingState {
    /// Paint color for new strokes.
    pub color: Rgb,
    /// Active tool or color. A menu-open mode asks the host to show that picker.
    #[serde(default)]
    pub tool_mode: ToolMode,
    /// Ghost layer: faded copy of the previous frame, read-only.
    pub previous_frame_paths: Vec<PathEntry>,
    /// Working paths of the current frame.
    pub current_paths: Vec<PathEntry>,
    pub is_undo_enabled: bool,
    pub is_restore_enabled: bool,
    pub is_play_enabled: bool,
    /// Stop only applies to playback, so this is false for every settled state.
    pub is_stop_enabled: bool,
}

impl EditingState {
    /// Empty canvas painting in `color`.
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            tool_mode: ToolMode::default(),
            previous_frame_paths: Vec::new(),
            current_paths: Vec::new(),
            is_undo_enabled: false,
            is_restore_enabled: false,
            is_play_enabled: false,
            is_stop_enabled: false,
        }
    }

    /// The frame this state is persisted as.
    pub fn to_frame(&self) -> Frame {
        Frame::with_paths(self.previous_frame_paths.clone(), self.current_paths.clone())
    }
}

/// One playback step. Never written back to the frame store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatingState {
    /// Index of the shown frame in the playback snapshot.
    pub frame_index: usize,
    pub display_paths: Vec<PathEntry>,
}

/// What the rendering surface shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Editing(EditingState),
    Animating(AnimatingState),
}

impl SessionState {
    pub fn is_animating(&self) -> bool {
        matches!(self, SessionState::Animating(_))
    }

    pub fn as_editing(&self) -> Option<&EditingState> {
        match self {
            SessionState::Editing(state) => Some(state),
            SessionState::Animating(_) => None,
        }
    }

    pub fn as_animating(&self) -> Option<&AnimatingState> {
        match self {
            SessionState::Animating(state) => Some(state),
            SessionState::Editing(_) => None,
        }
    }

    /// Whether the hosting UI should offer Stop.
    pub fn is_stop_enabled(&self) -> bool {
        match self {
            SessionState::Editing(state) => state.is_stop_enabled,
            SessionState::Animating(_) => true,
        }
    }

    /// Entries to paint, in order: ghost layer then working layer while
    /// editing, or the shown frame while animating.
    pub fn display_list(&self) -> Vec<&PathEntry> {
        match self {
            SessionState::Editing(state) => state
                .previous_frame_paths
                .iter()
                .chain(state.current_paths.iter())
                .collect(),
            SessionState::Animating(state) => state.display_paths.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{CompositingMode, PathGeometry};
    use kurbo::Point;

    fn stroke(x: f64, alpha: u8) -> PathEntry {
        PathEntry::new(
            PathGeometry::Polyline(vec![Point::new(x, x)]),
            Rgb::BLACK,
            CompositingMode::Normal,
            Point::new(x, x),
        )
        .with_alpha(alpha)
    }

    #[test]
    fn test_display_list_ghost_first() {
        let mut state = EditingState::new(Rgb::BLUE);
        state.previous_frame_paths = vec![stroke(1.0, 100)];
        state.current_paths = vec![stroke(2.0, 255), stroke(3.0, 255)];

        let state = SessionState::Editing(state);
        let list = state.display_list();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].alpha, 100);
        assert_eq!(list[2].anchor, Point::new(3.0, 3.0));
        assert!(!state.is_stop_enabled());
    }

    #[test]
    fn test_animating_state() {
        let state = SessionState::Animating(AnimatingState {
            frame_index: 1,
            display_paths: vec![stroke(5.0, 255)],
        });
        assert!(state.is_animating());
        assert!(state.as_editing().is_none());
        assert!(state.is_stop_enabled());
        assert_eq!(state.display_list().len(), 1);
    }

    #[test]
    fn test_to_frame() {
        let mut state = EditingState::new(Rgb::RED);
        state.current_paths = vec![stroke(1.0, 255)];
        let frame = state.to_frame();
        assert!(frame.ghost.is_empty());
        assert_eq!(frame.paths, state.current_paths);
    }
}
