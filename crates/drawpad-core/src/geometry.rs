//! Axis-aligned box tests used for hit-testing and rubber-band selection.
//!
//! All tests are inclusive on every edge, so a point on a border hits and two
//! boxes that only touch intersect.

use crate::shapes::Shape;
use kurbo::{Point, Rect};

/// Normalized bounding box of a shape's envelope.
pub fn bounding_box(shape: &Shape) -> Rect {
    shape.envelope().to_rect()
}

/// Normalized box spanned by two arbitrary corners.
pub fn normalized_rect(a: Point, b: Point) -> Rect {
    Rect::from_points(a, b)
}

/// Inclusive point-in-box test.
///
/// `Rect::contains` in kurbo excludes the far edges, so this is spelled out.
pub fn point_in_box(point: Point, rect: Rect) -> bool {
    rect.x0 <= point.x && point.x <= rect.x1 && rect.y0 <= point.y && point.y <= rect.y1
}

/// True unless one box lies strictly to one side of the other on either axis.
pub fn boxes_intersect(a: Rect, b: Rect) -> bool {
    !(a.x1 < b.x0 || b.x1 < a.x0) && !(a.y1 < b.y0 || b.y1 < a.y0)
}
