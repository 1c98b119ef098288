//! drawpad Core Library
//!
//! Platform-agnostic shapes, geometry and the pointer interaction state machine
//! behind the drawpad drawing surface.

pub mod canvas;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod shapes;
pub mod store;
pub mod tools;

pub use canvas::Canvas;
pub use geometry::{bounding_box, boxes_intersect, normalized_rect, point_in_box};
pub use input::PointerEvent;
pub use interaction::{DrawingState, InteractionState, Mode, MovingState, SelectingState};
pub use shapes::{DefaultShapeFactory, Envelope, SerializableColor, Shape, ShapeFactory, ShapeId, ShapeKind};
pub use store::ShapeStore;
pub use tools::ToolManager;
