//! Bridge from published states to a drawing backend.

use crate::session::SessionState;
use kurbo::BezPath;
use peniko::{BlendMode, Color};

/// A drawing backend, e.g. a vello scene or a platform canvas.
///
/// Paths are painted in order onto a single layer, so an erase entry clears
/// everything painted before it, ghost layer included.
pub trait Surface {
    /// Called once before the first path of a state.
    fn begin_frame(&mut self) {}

    /// Paint one path.
    fn paint(&mut self, path: &BezPath, color: Color, blend: BlendMode);

    /// Called once after the last path of a state.
    fn end_frame(&mut self) {}
}

/// Paint `state` onto `surface`.
pub fn render(state: &SessionState, surface: &mut impl Surface) {
    surface.begin_frame();
    let entries = state.display_list();
    for entry in &entries {
        surface.paint(&entry.to_path(), entry.paint_color(), entry.blend_mode());
    }
    surface.end_frame();
    log::trace!("Rendered {} paths", entries.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{CompositingMode, PathEntry, PathGeometry, Rgb};
    use crate::session::{AnimatingState, EditingState};
    use kurbo::{Point, Shape};
    use peniko::Compose;

    #[derive(Default)]
    struct Recorder {
        begun: usize,
        ended: usize,
        painted: Vec<(BezPath, Color, BlendMode)>,
    }

    impl Surface for Recorder {
        fn begin_frame(&mut self) {
            self.begun += 1;
        }

        fn paint(&mut self, path: &BezPath, color: Color, blend: BlendMode) {
            self.painted.push((path.clone(), color, blend));
        }

        fn end_frame(&mut self) {
            self.ended += 1;
        }
    }

    fn entry(x: f64, compositing: CompositingMode) -> PathEntry {
        PathEntry::new(
            PathGeometry::Polyline(vec![Point::new(x, 0.0), Point::new(x, 10.0)]),
            Rgb::RED,
            compositing,
            Point::new(x, 0.0),
        )
    }

    #[test]
    fn test_render_editing_state() {
        let mut state = EditingState::new(Rgb::BLUE);
        state.previous_frame_paths = vec![entry(1.0, CompositingMode::Normal).with_alpha(100)];
        state.current_paths = vec![
            entry(2.0, CompositingMode::Normal),
            entry(3.0, CompositingMode::Erase),
        ];

        let mut surface = Recorder::default();
        render(&SessionState::Editing(state), &mut surface);

        assert_eq!(surface.begun, 1);
        assert_eq!(surface.ended, 1);
        assert_eq!(surface.painted.len(), 3);

        let ghost = surface.painted[0].1.to_rgba8();
        assert_eq!((ghost.r, ghost.a), (255, 100));
        assert_eq!(surface.painted[1].1.to_rgba8().a, 255);
        assert_eq!(surface.painted[1].2.compose, Compose::SrcOver);
        assert_eq!(surface.painted[2].2.compose, Compose::Clear);

        let bounds = surface.painted[1].0.bounding_box();
        assert!((bounds.x0 - 2.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_render_animating_state() {
        let state = SessionState::Animating(AnimatingState {
            frame_index: 0,
            display_paths: vec![entry(4.0, CompositingMode::Normal)],
        });
        let mut surface = Recorder::default();
        render(&state, &mut surface);
        assert_eq!(surface.painted.len(), 1);
    }

    #[test]
    fn test_render_empty_state() {
        let mut surface = Recorder::default();
        render(&SessionState::Editing(EditingState::new(Rgb::BLUE)), &mut surface);
        assert_eq!(surface.begun, 1);
        assert!(surface.painted.is_empty());
    }
}
