//! Background worker that owns the reducer.
//!
//! Callers post actions through the `on_*` methods and drain published
//! states with [`Session::poll_states`]. Actions are handled one at a time
//! on a dedicated thread; while an action is still waiting, a newer one
//! replaces it.

use super::action::Action;
use super::mailbox::{Mailbox, Received};
use super::playback::PlaybackScheduler;
use super::reducer::{Reduction, SessionReducer};
use super::state::SessionState;
use super::{SessionError, SessionResult};
use crate::config::SessionConfig;
use crate::frames::frame_names;
use crate::input::{PointerInput, PointerPhase};
use crate::path::Rgb;
use crate::tools::ToolMode;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A running editing session.
pub struct Session {
    mailbox: Arc<Mailbox>,
    state_rx: Receiver<SessionState>,
    frame_count: Arc<AtomicUsize>,
    worker: Option<JoinHandle<()>>,
}

impl Session {
    /// Validate `config` and start the worker thread.
    ///
    /// The initial editing state is published before any action is handled.
    pub fn spawn(config: SessionConfig) -> SessionResult<Self> {
        config.validate()?;

        let mailbox = Arc::new(Mailbox::new());
        let frame_count = Arc::new(AtomicUsize::new(1));
        let (state_tx, state_rx) = mpsc::channel();

        let worker = {
            let mailbox = mailbox.clone();
            let frame_count = frame_count.clone();
            thread::Builder::new()
                .name("flipbook-session".to_string())
                .spawn(move || run_worker(config, &mailbox, &state_tx, &frame_count))
                .map_err(|e| {
                    log::error!("Failed to spawn session worker: {}", e);
                    SessionError::Spawn(e.to_string())
                })?
        };
        log::info!("Session started");

        Ok(Self {
            mailbox,
            state_rx,
            frame_count,
            worker: Some(worker),
        })
    }

    /// Post an action to the worker.
    pub fn dispatch(&self, action: Action) -> SessionResult<()> {
        if self.mailbox.post(action) {
            Ok(())
        } else {
            Err(SessionError::Disconnected)
        }
    }

    fn send(&self, action: Action) {
        let name = action.name();
        if let Err(e) = self.dispatch(action) {
            log::warn!("Dropping {}: {}", name, e);
        }
    }

    pub fn on_draw_pointer_event(&self, phase: PointerPhase, x: f64, y: f64, pointer_count: usize) {
        self.send(Action::Draw(PointerInput::new(phase, x, y, pointer_count)));
    }

    pub fn on_undo(&self) {
        self.send(Action::Undo);
    }

    pub fn on_restore(&self) {
        self.send(Action::Restore);
    }

    pub fn on_delete_frame(&self) {
        self.send(Action::DeleteFrame);
    }

    pub fn on_create_frame(&self) {
        self.send(Action::CreateFrame);
    }

    pub fn on_copy_frame(&self) {
        self.send(Action::CopyFrame);
    }

    pub fn on_delete_all_frames(&self) {
        self.send(Action::DeleteAllFrames);
    }

    pub fn on_play(&self) {
        self.send(Action::Play);
    }

    pub fn on_stop(&self) {
        self.send(Action::Stop);
    }

    pub fn on_tool_selected(&self, mode: ToolMode) {
        self.send(Action::SelectTool(mode));
    }

    /// `color` is `None` when the picker was dismissed.
    pub fn on_color_selected(&self, tool: ToolMode, color: Option<Rgb>) {
        self.send(Action::SelectColor { tool, color });
    }

    /// Drain published states (non-blocking).
    pub fn poll_states(&self) -> Vec<SessionState> {
        self.state_rx.try_iter().collect()
    }

    /// Wait up to `timeout` for the next published state.
    pub fn next_state(&self, timeout: Duration) -> Option<SessionState> {
        match self.state_rx.recv_timeout(timeout) {
            Ok(state) => Some(state),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Number of frames after the last handled action.
    pub fn frame_count(&self) -> usize {
        self.frame_count.load(Ordering::Acquire)
    }

    /// Frame labels for the frame picker.
    pub fn display_frames(&self) -> Vec<String> {
        frame_names(self.frame_count())
    }

    /// Stop the worker and wait for it. A pending action is still handled.
    pub fn shutdown(&mut self) {
        self.mailbox.close();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("Session worker panicked");
            } else {
                log::info!("Session stopped");
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_worker(
    config: SessionConfig,
    mailbox: &Mailbox,
    state_tx: &Sender<SessionState>,
    frame_count: &AtomicUsize,
) {
    let mut reducer = SessionReducer::new(config);
    let mut playback: Option<PlaybackScheduler> = None;

    if state_tx
        .send(SessionState::Editing(reducer.editing_state().clone()))
        .is_err()
    {
        return;
    }

    loop {
        let action = match playback.as_mut() {
            Some(scheduler) => match mailbox.recv_timeout(scheduler.interval()) {
                Received::Action(action) => action,
                Received::TimedOut => {
                    if let Some(state) = scheduler.next() {
                        if state_tx.send(SessionState::Animating(state)).is_err() {
                            break;
                        }
                    }
                    continue;
                }
                Received::Closed => break,
            },
            None => match mailbox.recv() {
                Some(action) => action,
                None => break,
            },
        };

        let reduction = reducer.reduce(action);
        frame_count.store(reducer.frames().len(), Ordering::Release);

        let published = match reduction {
            Reduction::Settled(state) => {
                playback = None;
                state_tx.send(SessionState::Editing(state))
            }
            Reduction::Playback(mut scheduler) => {
                let first = scheduler.next();
                playback = Some(scheduler);
                match first {
                    Some(state) => state_tx.send(SessionState::Animating(state)),
                    None => Ok(()),
                }
            }
        };
        if published.is_err() {
            break;
        }
    }

    log::debug!("Session worker exiting");
}
