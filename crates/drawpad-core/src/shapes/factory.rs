//! Shape construction.

use super::{Envelope, SerializableColor, Shape, ShapeId, ShapeKind};
use std::fmt::Debug;

/// Builds shapes for the drawing tool.
///
/// The canvas always supplies a fresh identifier and the envelope of the
/// current drag. Implementations must be total.
pub trait ShapeFactory: Debug {
    fn create_shape(
        &self,
        kind: ShapeKind,
        envelope: Envelope,
        id: ShapeId,
        color: SerializableColor,
    ) -> Shape;
}

/// Factory producing plain shapes from the drag envelope as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultShapeFactory;

impl ShapeFactory for DefaultShapeFactory {
    fn create_shape(
        &self,
        kind: ShapeKind,
        envelope: Envelope,
        id: ShapeId,
        color: SerializableColor,
    ) -> Shape {
        Shape::new(id, kind, envelope, color)
    }
}
