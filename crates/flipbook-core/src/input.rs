//! Pointer input delivered by the drawing surface.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer sample from the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    pub phase: PointerPhase,
    pub position: Point,
    /// Number of pointers touching the surface when the sample was taken.
    pub pointer_count: usize,
}

impl PointerInput {
    pub fn new(phase: PointerPhase, x: f64, y: f64, pointer_count: usize) -> Self {
        Self {
            phase,
            position: Point::new(x, y),
            pointer_count,
        }
    }

    /// Single-pointer sample.
    pub fn single(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self::new(phase, x, y, 1)
    }

    /// Whether the gesture uses more pointers than allowed.
    pub fn exceeds(&self, max_pointers: usize) -> bool {
        self.pointer_count > max_pointers
    }
}
