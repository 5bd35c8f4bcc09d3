//! The editing-session state machine.

use super::action::Action;
use super::playback::{CancellationToken, PlaybackScheduler};
use super::state::EditingState;
use crate::config::SessionConfig;
use crate::frames::{Frame, FrameStore};
use crate::history::StrokeHistory;
use crate::input::{PointerInput, PointerPhase};
use crate::path::{PathBuilder, PathEntry};
use crate::tools::ToolMode;

/// Result of reducing one action.
#[derive(Debug)]
pub enum Reduction {
    /// A new editing state, already written back to the frame store.
    Settled(EditingState),
    /// Playback started; the caller drives the scheduler.
    Playback(PlaybackScheduler),
}

/// Owns the frame store, the tool mode and the redo snapshot, and turns
/// actions into states one at a time.
///
/// Every action cancels the playback started by the previous one before it
/// is handled. Invalid input never fails: it settles on the unchanged
/// editing state.
#[derive(Debug)]
pub struct SessionReducer {
    config: SessionConfig,
    frames: FrameStore,
    history: StrokeHistory,
    mode: ToolMode,
    /// Last settled state. Stop returns here.
    editing: EditingState,
    /// A pointer-down was handled and no other action has arrived since.
    stroke_active: bool,
    playback: Option<CancellationToken>,
}

impl SessionReducer {
    pub fn new(config: SessionConfig) -> Self {
        let editing = EditingState::new(config.initial_color);
        Self {
            config,
            frames: FrameStore::new(),
            history: StrokeHistory::new(),
            mode: ToolMode::default(),
            editing,
            stroke_active: false,
            playback: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn frames(&self) -> &FrameStore {
        &self.frames
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    /// The most recent settled state.
    pub fn editing_state(&self) -> &EditingState {
        &self.editing
    }

    /// Handle one action.
    pub fn reduce(&mut self, action: Action) -> Reduction {
        if let Some(token) = self.playback.take() {
            token.cancel();
            log::info!("Playback cancelled by {}", action.name());
        }
        log::debug!("Reducing {}", action.name());

        if !matches!(action, Action::Draw(_)) {
            self.stroke_active = false;
        }

        match action {
            Action::Draw(input) => self.draw(input),
            Action::Undo => self.undo(),
            Action::Restore => self.restore(),
            Action::DeleteFrame => self.delete_frame(),
            Action::CreateFrame => self.create_frame(false),
            Action::CopyFrame => self.create_frame(true),
            Action::DeleteAllFrames => self.delete_all_frames(),
            Action::Play => self.play(),
            Action::Stop => Reduction::Settled(self.editing.clone()),
            Action::SelectTool(mode) => {
                self.set_mode(mode);
                self.unchanged()
            }
            Action::SelectColor { tool, color } => {
                self.set_mode(tool);
                if let Some(color) = color {
                    self.editing.color = color;
                }
                self.unchanged()
            }
        }
    }

    fn set_mode(&mut self, mode: ToolMode) {
        if self.mode != mode {
            log::debug!("Tool mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    fn draw(&mut self, input: PointerInput) -> Reduction {
        let Some(tool) = self.mode.drawing_tool() else {
            log::debug!("Ignoring pointer input in {:?}", self.mode);
            return self.unchanged();
        };
        if input.exceeds(self.config.max_pointers) {
            log::debug!("Ignoring {}-pointer input", input.pointer_count);
            return self.unchanged();
        }

        let mut paths = self.editing.current_paths.clone();
        match input.phase {
            PointerPhase::Down => {
                paths.push(PathBuilder::begin(tool, input.position, self.editing.color));
                self.stroke_active = true;
            }
            PointerPhase::Move => {
                let last = match paths.last_mut() {
                    Some(last) if self.stroke_active => last,
                    _ => return self.unchanged(),
                };
                *last = PathBuilder::continue_to(last, tool, input.position);
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                self.stroke_active = false;
                return self.unchanged();
            }
        }

        self.history.record(&paths);
        let ghost = self.editing.previous_frame_paths.clone();
        self.settle(ghost, paths)
    }

    fn undo(&mut self) -> Reduction {
        let mut paths = self.editing.current_paths.clone();
        if paths.pop().is_none() {
            return self.unchanged();
        }
        let ghost = self.editing.previous_frame_paths.clone();
        self.settle(ghost, paths)
    }

    fn restore(&mut self) -> Reduction {
        let mut paths = self.editing.current_paths.clone();
        let Some(next) = self.history.next_after(paths.len()) else {
            return self.unchanged();
        };
        paths.push(next.clone());
        let ghost = self.editing.previous_frame_paths.clone();
        self.settle(ghost, paths)
    }

    fn delete_frame(&mut self) -> Reduction {
        let before = self.frames.len();
        let current = self.frames.remove_last().clone();
        log::info!("Deleted frame {} of {}", before, before);

        self.history.record(&current.paths);
        self.settle(current.ghost, current.paths)
    }

    /// Append a frame whose ghost is the faded working layer. A copy keeps the
    /// working paths as well.
    fn create_frame(&mut self, keep_paths: bool) -> Reduction {
        let ghost: Vec<PathEntry> = self
            .editing
            .current_paths
            .iter()
            .map(|entry| entry.with_alpha(self.config.ghost_alpha))
            .collect();
        let paths = if keep_paths {
            self.editing.current_paths.clone()
        } else {
            Vec::new()
        };

        self.frames.append(Frame::with_paths(ghost.clone(), paths.clone()));
        log::info!(
            "{} frame {}",
            if keep_paths { "Copied" } else { "Created" },
            self.frames.len()
        );

        self.history.record(&paths);
        self.settle(ghost, paths)
    }

    fn delete_all_frames(&mut self) -> Reduction {
        log::info!("Deleting all {} frames", self.frames.len());
        self.frames.clear();
        self.history.record(&[]);
        self.settle(Vec::new(), Vec::new())
    }

    fn play(&mut self) -> Reduction {
        let scheduler = PlaybackScheduler::new(self.frames.snapshot(), self.config.playback_interval());
        log::info!("Playing {} frames", scheduler.frame_count());
        self.playback = Some(scheduler.token());
        Reduction::Playback(scheduler)
    }

    /// Settle on the current editing state without changes.
    fn unchanged(&mut self) -> Reduction {
        let ghost = self.editing.previous_frame_paths.clone();
        let paths = self.editing.current_paths.clone();
        self.settle(ghost, paths)
    }

    /// Build the next editing state and write it back as the current frame.
    fn settle(&mut self, ghost: Vec<PathEntry>, paths: Vec<PathEntry>) -> Reduction {
        let state = EditingState {
            color: self.editing.color,
            tool_mode: self.mode,
            is_undo_enabled: !paths.is_empty(),
            is_restore_enabled: self.history.can_restore(paths.len()),
            is_play_enabled: self.frames.len() > 1,
            is_stop_enabled: false,
            previous_frame_paths: ghost,
            current_paths: paths,
        };
        self.frames.replace_last(state.to_frame());
        self.editing = state.clone();
        Reduction::Settled(state)
    }
}
