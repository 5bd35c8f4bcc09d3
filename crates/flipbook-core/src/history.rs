//! Redo support for the current frame.

use crate::path::PathEntry;

/// Single-generation snapshot of the working paths after the last real
/// drawing action.
///
/// Redo walks the working list back up to this snapshot one entry at a
/// time. Any new stroke replaces the snapshot, so entries undone before it
/// cannot be restored.
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    snapshot: Vec<PathEntry>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot.
    pub fn record(&mut self, paths: &[PathEntry]) {
        self.snapshot = paths.to_vec();
    }

    /// Number of entries in the snapshot.
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    /// Whether a working list of `current_len` entries can be extended.
    pub fn can_restore(&self, current_len: usize) -> bool {
        current_len < self.snapshot.len()
    }

    /// The entry that follows a working list of `current_len` entries.
    pub fn next_after(&self, current_len: usize) -> Option<&PathEntry> {
        self.snapshot.get(current_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{CompositingMode, PathGeometry, Rgb};
    use kurbo::Point;

    fn stroke(x: f64) -> PathEntry {
        PathEntry::new(
            PathGeometry::Polyline(vec![Point::new(x, 0.0)]),
            Rgb::RED,
            CompositingMode::Normal,
            Point::new(x, 0.0),
        )
    }

    #[test]
    fn test_empty_history() {
        let history = StrokeHistory::new();
        assert!(history.is_empty());
        assert!(!history.can_restore(0));
        assert!(history.next_after(0).is_none());
    }

    #[test]
    fn test_next_after() {
        let mut history = StrokeHistory::new();
        history.record(&[stroke(1.0), stroke(2.0), stroke(3.0)]);

        assert!(history.can_restore(1));
        assert_eq!(history.next_after(1), Some(&stroke(2.0)));
        assert!(!history.can_restore(3));
        assert!(history.next_after(3).is_none());
    }

    #[test]
    fn test_record_replaces() {
        let mut history = StrokeHistory::new();
        history.record(&[stroke(1.0), stroke(2.0)]);
        history.record(&[stroke(9.0)]);
        assert_eq!(history.len(), 1);
        assert!(!history.can_restore(1));
    }
}
