//! Frame storage.

use crate::path::PathEntry;
use serde::{Deserialize, Serialize};

/// One animation cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Faded copy of the previous frame's paths, shown as a tracing aid.
    pub ghost: Vec<PathEntry>,
    /// The frame's own paths in paint order.
    pub paths: Vec<PathEntry>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(ghost: Vec<PathEntry>, paths: Vec<PathEntry>) -> Self {
        Self { ghost, paths }
    }

    /// Check if the frame has nothing drawn and no ghost layer.
    pub fn is_empty(&self) -> bool {
        self.ghost.is_empty() && self.paths.is_empty()
    }
}

/// Display name of the frame at `index` (0-based).
pub fn frame_name(index: usize) -> String {
    format!("Frame {}", index + 1)
}

/// Display names for `count` frames.
pub fn frame_names(count: usize) -> Vec<String> {
    (0..count).map(frame_name).collect()
}

/// Ordered frame collection.
///
/// Never empty. The last frame is the one being edited; frames are only
/// added and removed at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameStore {
    frames: Vec<Frame>,
}

impl Default for FrameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStore {
    /// Create a store holding a single empty frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new()],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the store holds no frames. False after `new`.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frame being edited.
    pub fn current(&self) -> &Frame {
        // The store is never empty.
        &self.frames[self.frames.len() - 1]
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Owned copy of every frame, for playback.
    pub fn snapshot(&self) -> Vec<Frame> {
        self.frames.clone()
    }

    /// Append a new current frame.
    pub fn append(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Overwrite the current frame.
    pub fn replace_last(&mut self, frame: Frame) {
        let last = self.frames.len() - 1;
        self.frames[last] = frame;
    }

    /// Remove the current frame and return the new current one.
    ///
    /// With a single frame left it is replaced by an empty frame instead.
    pub fn remove_last(&mut self) -> &Frame {
        if self.frames.len() == 1 {
            self.frames[0] = Frame::new();
        } else {
            self.frames.pop();
        }
        self.current()
    }

    /// Collapse to a single empty frame.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.frames.push(Frame::new());
    }

    /// Display names, one per frame, in order.
    pub fn display_names(&self) -> Vec<String> {
        frame_names(self.frames.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{CompositingMode, PathGeometry, Rgb};
    use kurbo::Point;

    fn stroke(x: f64) -> PathEntry {
        PathEntry::new(
            PathGeometry::Polyline(vec![Point::new(x, x)]),
            Rgb::BLACK,
            CompositingMode::Normal,
            Point::new(x, x),
        )
    }

    #[test]
    fn test_new_store_has_one_empty_frame() {
        let store = FrameStore::new();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert!(store.current().is_empty());
    }

    #[test]
    fn test_append_and_remove() {
        let mut store = FrameStore::new();
        store.append(Frame::with_paths(Vec::new(), vec![stroke(1.0)]));
        assert_eq!(store.len(), 2);
        assert_eq!(store.current().paths.len(), 1);

        let current = store.remove_last();
        assert!(current.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_last_frame_keeps_one() {
        let mut store = FrameStore::new();
        store.replace_last(Frame::with_paths(vec![stroke(0.0)], vec![stroke(1.0)]));

        store.remove_last();
        assert_eq!(store.len(), 1);
        assert!(store.current().is_empty());

        store.remove_last();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut store = FrameStore::new();
        for i in 0..4 {
            store.append(Frame::with_paths(Vec::new(), vec![stroke(i as f64)]));
        }
        store.clear();
        assert_eq!(store.len(), 1);
        assert!(store.current().is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = FrameStore::new();
        let snapshot = store.snapshot();
        store.replace_last(Frame::with_paths(Vec::new(), vec![stroke(1.0)]));
        assert!(snapshot[0].is_empty());
        assert_eq!(store.frames()[0].paths.len(), 1);
    }

    #[test]
    fn test_display_names() {
        let mut store = FrameStore::new();
        store.append(Frame::new());
        store.append(Frame::new());
        assert_eq!(store.display_names(), vec!["Frame 1", "Frame 2", "Frame 3"]);
    }
}
