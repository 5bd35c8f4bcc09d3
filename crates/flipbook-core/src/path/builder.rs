//! Anchor-based geometry construction for pointer gestures.

use super::{CompositingMode, PathEntry, PathGeometry, Rgb};
use crate::tools::DrawingTool;
use kurbo::{Circle, Line, Point, Rect};

/// Builds and updates path entries from pointer positions.
///
/// Freehand tools accumulate a polyline. Shape tools are rebuilt from the
/// entry's anchor on every update, so only the anchor and the latest point
/// matter for them.
pub struct PathBuilder;

impl PathBuilder {
    /// Start a new entry at `point`.
    pub fn begin(tool: DrawingTool, point: Point, color: Rgb) -> PathEntry {
        let geometry = match tool {
            DrawingTool::Pencil | DrawingTool::Eraser => PathGeometry::Polyline(vec![point]),
            DrawingTool::Line => PathGeometry::Line(Line::new(point, point)),
            DrawingTool::Rectangle => PathGeometry::Rect(Rect::from_points(point, point)),
            DrawingTool::Circle => PathGeometry::Circle(Circle::new(point, 0.0)),
        };
        PathEntry::new(geometry, color, Self::compositing_for(tool), point)
    }

    /// Continue the gesture of `entry` to `point`, returning the updated entry.
    pub fn continue_to(entry: &PathEntry, tool: DrawingTool, point: Point) -> PathEntry {
        let anchor = entry.anchor;
        let geometry = match tool {
            DrawingTool::Pencil | DrawingTool::Eraser => {
                let mut points = match &entry.geometry {
                    PathGeometry::Polyline(points) => points.clone(),
                    // Shape geometry: restart the stroke at the anchor.
                    _ => vec![anchor],
                };
                points.push(point);
                PathGeometry::Polyline(points)
            }
            DrawingTool::Line => PathGeometry::Line(Line::new(anchor, point)),
            DrawingTool::Rectangle => PathGeometry::Rect(Rect::new(
                anchor.x.min(point.x),
                anchor.y.min(point.y),
                anchor.x.max(point.x),
                anchor.y.max(point.y),
            )),
            DrawingTool::Circle => PathGeometry::Circle(Circle::new(anchor, anchor.distance(point))),
        };

        PathEntry {
            geometry,
            ..entry.clone()
        }
    }

    fn compositing_for(tool: DrawingTool) -> CompositingMode {
        match tool {
            DrawingTool::Eraser => CompositingMode::Erase,
            _ => CompositingMode::Normal,
        }
    }
}
