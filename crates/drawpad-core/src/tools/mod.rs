//! Active drawing settings chosen from the toolbar.

use crate::shapes::{
    DefaultShapeFactory, Envelope, SerializableColor, Shape, ShapeFactory, ShapeId, ShapeKind,
};
use kurbo::Point;

/// Holds the shape kind and color applied to new shapes, and the factory that builds them.
#[derive(Debug)]
pub struct ToolManager {
    /// Kind of shape the drawing tool produces.
    pub current_kind: ShapeKind,
    /// Color applied to new shapes.
    pub current_color: SerializableColor,
    factory: Box<dyn ShapeFactory>,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self {
            current_kind: ShapeKind::default(),
            current_color: SerializableColor::default(),
            factory: Box::new(DefaultShapeFactory),
        }
    }
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_shape_kind(&mut self, kind: ShapeKind) {
        self.current_kind = kind;
    }

    pub fn set_color(&mut self, color: SerializableColor) {
        self.current_color = color;
    }

    /// Replace the factory used for new shapes.
    pub fn set_factory(&mut self, factory: Box<dyn ShapeFactory>) {
        self.factory = factory;
    }

    /// Build a shape from a drag, using the active kind and color.
    pub fn create_shape(&self, start: Point, end: Point, id: ShapeId) -> Shape {
        self.factory.create_shape(
            self.current_kind,
            Envelope::new(start, end),
            id,
            self.current_color,
        )
    }
}
