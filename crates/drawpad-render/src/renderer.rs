//! Renderer trait abstraction.

use drawpad_core::canvas::Canvas;
use drawpad_core::shapes::{Shape, ShapeId};
use kurbo::{Rect, Size};
use peniko::Color;
use std::collections::HashSet;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
}

impl From<std::fmt::Error> for RendererError {
    fn from(e: std::fmt::Error) -> Self {
        RendererError::RenderFailed(e.to_string())
    }
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Shapes to draw, back to front.
    pub shapes: Vec<&'a Shape>,
    /// Shapes to highlight.
    pub selected: HashSet<ShapeId>,
    /// Selection rectangle (rubber band) of an ongoing sweep.
    pub selection_rect: Option<Rect>,
    /// Viewport size in pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Selection highlight color.
    pub selection_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a context for the given shapes.
    pub fn new(shapes: Vec<&'a Shape>, viewport_size: Size) -> Self {
        Self {
            shapes,
            selected: HashSet::new(),
            selection_rect: None,
            viewport_size,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            selection_color: Color::from_rgba8(59, 130, 246, 255), // Blue
        }
    }

    /// Snapshot what the canvas currently wants on screen.
    pub fn from_canvas(canvas: &'a Canvas, viewport_size: Size) -> Self {
        Self::new(canvas.current_shapes(), viewport_size)
            .with_selected(canvas.selected_shapes().into_iter().map(Shape::id))
            .with_selection_rect(canvas.selection_rect())
    }

    /// Set the shapes to highlight.
    pub fn with_selected(mut self, ids: impl IntoIterator<Item = ShapeId>) -> Self {
        self.selected = ids.into_iter().collect();
        self
    }

    /// Set the selection rectangle.
    pub fn with_selection_rect(mut self, rect: Option<Rect>) -> Self {
        self.selection_rect = rect;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the selection highlight color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected.contains(&id)
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the drawing commands for a frame.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
