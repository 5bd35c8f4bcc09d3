//! Flip-book playback over a frame snapshot.

use super::state::AnimatingState;
use crate::frames::Frame;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared cancellation flag for a running playback.
///
/// Clones observe the same flag. Once cancelled it stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Endless, cancellable walk over the frames captured when Play was pressed.
///
/// Yields frame 0, 1, .., n-1, then wraps to 0 again. The caller waits
/// `interval()` between two items. Iteration ends only when the token is
/// cancelled.
#[derive(Debug)]
pub struct PlaybackScheduler {
    frames: Vec<Frame>,
    next_index: usize,
    interval: Duration,
    token: CancellationToken,
}

impl PlaybackScheduler {
    pub fn new(frames: Vec<Frame>, interval: Duration) -> Self {
        Self {
            frames,
            next_index: 0,
            interval,
            token: CancellationToken::new(),
        }
    }

    /// Delay between two emitted frames.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of frames in the snapshot.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Handle that stops this playback when cancelled.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Iterator for PlaybackScheduler {
    type Item = AnimatingState;

    fn next(&mut self) -> Option<AnimatingState> {
        if self.token.is_cancelled() || self.frames.is_empty() {
            return None;
        }

        let frame_index = self.next_index;
        self.next_index = (frame_index + 1) % self.frames.len();
        Some(AnimatingState {
            frame_index,
            display_paths: self.frames[frame_index].paths.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{CompositingMode, PathEntry, PathGeometry, Rgb};
    use kurbo::Point;

    fn frame_with(count: usize) -> Frame {
        let paths = (0..count)
            .map(|i| {
                PathEntry::new(
                    PathGeometry::Polyline(vec![Point::new(i as f64, 0.0)]),
                    Rgb::BLACK,
                    CompositingMode::Normal,
                    Point::new(i as f64, 0.0),
                )
            })
            .collect();
        Frame::with_paths(Vec::new(), paths)
    }

    #[test]
    fn test_loops_over_frames() {
        let scheduler = PlaybackScheduler::new(
            vec![frame_with(1), frame_with(2)],
            Duration::from_millis(500),
        );
        let indices: Vec<usize> = scheduler.take(5).map(|s| s.frame_index).collect();
        assert_eq!(indices, vec![0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_emits_each_frames_paths() {
        let frames = vec![frame_with(1), frame_with(3)];
        let scheduler = PlaybackScheduler::new(frames.clone(), Duration::from_millis(500));

        let shown: Vec<AnimatingState> = scheduler.take(3).collect();
        assert_eq!(shown[0].display_paths.len(), 1);
        assert_eq!(shown[1].display_paths.len(), 3);
        assert_eq!(shown[2].display_paths.len(), 1);
        assert_eq!(shown[1].display_paths, frames[1].paths);
        assert_eq!(shown[2].display_paths, frames[0].paths);
    }

    #[test]
    fn test_emits_working_paths_only() {
        let mut frame = frame_with(2);
        frame.ghost = frame_with(3).paths;
        let mut scheduler = PlaybackScheduler::new(vec![frame], Duration::from_millis(10));

        let first = scheduler.next().unwrap();
        assert_eq!(first.display_paths.len(), 2);
    }

    #[test]
    fn test_cancel_stops_iteration() {
        let mut scheduler = PlaybackScheduler::new(vec![frame_with(1)], Duration::from_millis(10));
        let token = scheduler.token();

        assert!(scheduler.next().is_some());
        token.cancel();
        assert!(scheduler.is_cancelled());
        assert!(scheduler.next().is_none());
    }

    #[test]
    fn test_snapshot_independent_of_source() {
        let mut frames = vec![frame_with(1)];
        let mut scheduler = PlaybackScheduler::new(frames.clone(), Duration::from_millis(10));
        frames[0] = frame_with(4);

        assert_eq!(scheduler.next().unwrap().display_paths.len(), 1);
    }

    #[test]
    fn test_token_clones_share_flag() {
        let token = CancellationToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
    }
}
