//! Shape definitions for the drawing surface.

mod factory;

pub use factory::{DefaultShapeFactory, ShapeFactory};

use kurbo::{BezPath, Ellipse, Line, Point, Rect, Shape as KurboShape, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Flattening tolerance used when converting curves to paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Unique identifier for shapes. Allocated by the store, never reused.
pub type ShapeId = u64;

/// Available shape types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
    Line,
}

impl ShapeKind {
    /// Display name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line => "line",
        }
    }
}

/// The two opposite corners of a shape's bounding rectangle.
///
/// The corners are kept as drawn: `start` may lie right of or below `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub start: Point,
    pub end: Point,
}

impl Envelope {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The normalized rectangle spanned by both corners.
    pub fn to_rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    /// The envelope shifted by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}

/// A committed or preview shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    envelope: Envelope,
    color: SerializableColor,
}

impl Shape {
    /// Create a new shape.
    pub fn new(id: ShapeId, kind: ShapeKind, envelope: Envelope, color: SerializableColor) -> Self {
        Self {
            id,
            kind,
            envelope,
            color,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    pub fn color(&self) -> SerializableColor {
        self.color
    }

    /// Move the shape in place. Identity, kind and color are untouched.
    pub fn translate(&mut self, offset: Vec2) {
        self.envelope = self.envelope.translated(offset);
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        match self.kind {
            ShapeKind::Rectangle => self.envelope.to_rect().to_path(PATH_TOLERANCE),
            ShapeKind::Ellipse => Ellipse::from_rect(self.envelope.to_rect()).to_path(PATH_TOLERANCE),
            ShapeKind::Line => Line::new(self.envelope.start, self.envelope.end).to_path(PATH_TOLERANCE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(kind: ShapeKind, x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
        Shape::new(
            7,
            kind,
            Envelope::new(Point::new(x0, y0), Point::new(x1, y1)),
            SerializableColor::new(200, 10, 10, 255),
        )
    }

    #[test]
    fn test_translate_keeps_identity() {
        let mut s = shape(ShapeKind::Ellipse, 10.0, 10.0, 0.0, 0.0);
        s.translate(Vec2::new(5.0, -3.0));

        assert_eq!(s.id(), 7);
        assert_eq!(s.kind(), ShapeKind::Ellipse);
        assert_eq!(s.color(), SerializableColor::new(200, 10, 10, 255));
        // Corners stay un-normalized after a move.
        assert_eq!(s.envelope().start, Point::new(15.0, 7.0));
        assert_eq!(s.envelope().end, Point::new(5.0, -3.0));
    }

    #[test]
    fn test_envelope_to_rect_normalizes() {
        let env = Envelope::new(Point::new(100.0, 20.0), Point::new(50.0, 80.0));
        let rect = env.to_rect();
        assert!((rect.x0 - 50.0).abs() < f64::EPSILON);
        assert!((rect.y0 - 20.0).abs() < f64::EPSILON);
        assert!((rect.x1 - 100.0).abs() < f64::EPSILON);
        assert!((rect.y1 - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_paths_are_not_empty() {
        for kind in [ShapeKind::Rectangle, ShapeKind::Ellipse, ShapeKind::Line] {
            let path = shape(kind, 0.0, 0.0, 40.0, 30.0).to_path();
            assert!(!path.elements().is_empty(), "{} produced an empty path", kind.name());
        }
    }

    #[test]
    fn test_line_path_follows_drawn_direction() {
        let path = shape(ShapeKind::Line, 40.0, 30.0, 0.0, 0.0).to_path();
        let first = path.elements().first().copied();
        assert_eq!(first, Some(kurbo::PathEl::MoveTo(Point::new(40.0, 30.0))));
    }

    #[test]
    fn test_color_round_trips_through_peniko() {
        let color = SerializableColor::new(12, 34, 56, 255);
        let peniko_color: Color = color.into();
        assert_eq!(SerializableColor::from(peniko_color), color);
    }

    #[test]
    fn test_shape_kind_serde_names() {
        let kind: ShapeKind = serde_json::from_str("\"ellipse\"").unwrap();
        assert_eq!(kind, ShapeKind::Ellipse);
        assert_eq!(serde_json::to_string(&ShapeKind::Line).unwrap(), "\"line\"");
    }
}
