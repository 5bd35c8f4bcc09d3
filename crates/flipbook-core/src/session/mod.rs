//! Editing session: action reducer, playback and the worker that runs them.

mod action;
pub(crate) mod mailbox;
mod playback;
mod reducer;
mod runtime;
mod state;

pub use action::Action;
pub use playback::{CancellationToken, PlaybackScheduler};
pub use reducer::{Reduction, SessionReducer};
pub use runtime::Session;
pub use state::{AnimatingState, EditingState, SessionState};

use crate::config::ConfigError;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session worker has shut down")]
    Disconnected,
    #[error("Failed to start session worker: {0}")]
    Spawn(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
