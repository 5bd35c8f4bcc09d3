//! Flipbook Core Library
//!
//! Frame-by-frame drawing sessions: a stack of frames with an onion-skin
//! ghost of the previous frame, single-step undo/redo, and looping playback.

pub mod config;
pub mod frames;
pub mod history;
pub mod input;
pub mod path;
pub mod render;
pub mod session;
pub mod tools;

pub use config::{ConfigError, ConfigResult, SessionConfig};
pub use frames::{Frame, FrameStore, frame_name, frame_names};
pub use history::StrokeHistory;
pub use input::{PointerInput, PointerPhase};
pub use path::{CompositingMode, PathBuilder, PathEntry, PathGeometry, Rgb};
pub use render::{Surface, render};
pub use session::{
    Action, AnimatingState, CancellationToken, EditingState, PlaybackScheduler, Reduction, Session,
    SessionError, SessionReducer, SessionResult, SessionState,
};
pub use tools::{DrawingTool, ToolMode};
