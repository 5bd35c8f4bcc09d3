//! Drawn path entries: the unit of paint inside a frame.

mod builder;

pub use builder::PathBuilder;

use kurbo::{BezPath, Circle, Line, Point, Rect, Shape as KurboShape};
use peniko::{BlendMode, Color, Compose, Mix};
use serde::{Deserialize, Serialize};

/// Fully opaque alpha, the default for freshly drawn entries.
pub const OPAQUE: u8 = 255;

/// Flattening tolerance used when converting shapes to Bézier paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Serializable RGB color. Opacity is carried separately on each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Combine with an alpha value into a peniko color.
    pub fn with_alpha(self, alpha: u8) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, alpha)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
        }
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        color.with_alpha(OPAQUE)
    }
}

/// How an entry is combined with what is already painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompositingMode {
    /// Regular source-over paint.
    #[default]
    Normal,
    /// Clears the pixels under the stroke instead of painting.
    Erase,
}

impl CompositingMode {
    /// Blend mode a vello/peniko backed surface should use for this entry.
    pub fn blend_mode(self) -> BlendMode {
        match self {
            CompositingMode::Normal => BlendMode::new(Mix::Normal, Compose::SrcOver),
            CompositingMode::Erase => BlendMode::new(Mix::Normal, Compose::Clear),
        }
    }
}

/// Geometry of a single entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PathGeometry {
    /// Freehand stroke: a move-to followed by line-tos.
    Polyline(Vec<Point>),
    /// Straight segment from the anchor to the latest point.
    Line(Line),
    /// Axis-aligned rectangle spanned by the anchor and the latest point.
    Rect(Rect),
    /// Circle centered on the anchor.
    Circle(Circle),
}

impl PathGeometry {
    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        match self {
            PathGeometry::Polyline(points) => {
                let mut path = BezPath::new();
                let Some((first, rest)) = points.split_first() else {
                    return path;
                };
                path.move_to(*first);
                for point in rest {
                    path.line_to(*point);
                }
                path
            }
            PathGeometry::Line(line) => line.to_path(PATH_TOLERANCE),
            PathGeometry::Rect(rect) => rect.to_path(PATH_TOLERANCE),
            PathGeometry::Circle(circle) => circle.to_path(PATH_TOLERANCE),
        }
    }

    /// Get the bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            PathGeometry::Polyline(points) => {
                let Some(first) = points.first() else {
                    return Rect::ZERO;
                };
                points
                    .iter()
                    .skip(1)
                    .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
            }
            PathGeometry::Line(line) => line.bounding_box(),
            PathGeometry::Rect(rect) => *rect,
            PathGeometry::Circle(circle) => circle.bounding_box(),
        }
    }
}

/// One drawn stroke or shape.
///
/// Entries have no identity of their own: they are addressed by their
/// position in the owning frame's list, and later entries paint over
/// earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEntry {
    pub geometry: PathGeometry,
    pub color: Rgb,
    #[serde(default = "default_alpha")]
    pub alpha: u8,
    #[serde(default)]
    pub compositing: CompositingMode,
    /// Where the gesture started. Shape tools rebuild their geometry from it.
    pub anchor: Point,
}

fn default_alpha() -> u8 {
    OPAQUE
}

impl PathEntry {
    /// Create an opaque entry.
    pub fn new(geometry: PathGeometry, color: Rgb, compositing: CompositingMode, anchor: Point) -> Self {
        Self {
            geometry,
            color,
            alpha: OPAQUE,
            compositing,
            anchor,
        }
    }

    /// A copy of this entry with a different alpha.
    pub fn with_alpha(&self, alpha: u8) -> Self {
        Self {
            alpha,
            ..self.clone()
        }
    }

    /// Paint color with this entry's alpha applied.
    pub fn paint_color(&self) -> Color {
        self.color.with_alpha(self.alpha)
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.compositing.blend_mode()
    }

    pub fn to_path(&self) -> BezPath {
        self.geometry.to_path()
    }

    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }

    pub fn is_erase(&self) -> bool {
        self.compositing == CompositingMode::Erase
    }
}
