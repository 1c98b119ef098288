//! Drag-to-draw behavior.

use super::InteractionState;
use crate::shapes::Shape;
use crate::store::ShapeStore;
use crate::tools::ToolManager;
use kurbo::Point;

/// Turns a press-drag-release gesture into a new committed shape.
///
/// A press that lands on an existing shape hands control to the moving state
/// instead of starting a drag.
#[derive(Debug, Clone, Default)]
pub struct DrawingState {
    /// Where the current drag started.
    anchor: Point,
    /// Last recorded pointer position.
    current: Point,
    /// Shape shown while dragging, committed on release.
    preview: Option<Shape>,
    drawing: bool,
}

impl DrawingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// The uncommitted shape of the current drag.
    pub fn preview(&self) -> Option<&Shape> {
        if self.drawing {
            self.preview.as_ref()
        } else {
            None
        }
    }

    pub(super) fn press(&mut self, point: Point, store: &ShapeStore) -> Option<InteractionState> {
        if let Some(id) = store.hit_test(point) {
            log::debug!("Press at ({}, {}) hit shape {}", point.x, point.y, id);
            return Some(InteractionState::moving());
        }

        self.anchor = point;
        self.current = point;
        self.preview = None;
        self.drawing = true;
        None
    }

    pub(super) fn drag(&mut self, point: Point, store: &ShapeStore, tools: &ToolManager) {
        if !self.drawing || point == self.current {
            return;
        }
        self.current = point;
        self.preview = Some(tools.create_shape(self.anchor, self.current, store.next_id()));
    }

    pub(super) fn release(&mut self, store: &mut ShapeStore) {
        if !self.drawing {
            return;
        }
        self.drawing = false;
        if let Some(shape) = self.preview.take() {
            store.add(shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Envelope, ShapeKind};

    #[test]
    fn test_drag_builds_preview_with_next_id() {
        let mut store = ShapeStore::new();
        let tools = ToolManager::new();
        let mut state = DrawingState::new();

        assert!(state.press(Point::new(10.0, 10.0), &store).is_none());
        state.drag(Point::new(30.0, 5.0), &store, &tools);

        let preview = state.preview().cloned();
        assert_eq!(preview.as_ref().map(Shape::id), Some(store.next_id()));
        assert_eq!(
            preview.map(|s| s.envelope()),
            Some(Envelope::new(Point::new(10.0, 10.0), Point::new(30.0, 5.0)))
        );

        state.release(&mut store);
        assert_eq!(store.len(), 1);
        assert!(state.preview().is_none());
        assert!(!state.is_drawing());
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let store = ShapeStore::new();
        let tools = ToolManager::new();
        let mut state = DrawingState::new();

        state.drag(Point::new(5.0, 5.0), &store, &tools);
        assert!(state.preview().is_none());
    }

    #[test]
    fn test_move_to_press_point_is_noop() {
        let mut store = ShapeStore::new();
        let tools = ToolManager::new();
        let mut state = DrawingState::new();

        state.press(Point::new(4.0, 4.0), &store);
        state.drag(Point::new(4.0, 4.0), &store, &tools);
        assert!(state.preview().is_none());

        state.release(&mut store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_repeated_move_keeps_preview() {
        let mut store = ShapeStore::new();
        let tools = ToolManager::new();
        let mut state = DrawingState::new();

        state.press(Point::new(1.0, 1.0), &store);
        state.drag(Point::new(6.0, 3.0), &store, &tools);
        let before = state.preview().cloned();
        state.drag(Point::new(6.0, 3.0), &store, &tools);
        assert!(before.is_some());
        assert_eq!(state.preview().map(Shape::envelope), before.as_ref().map(Shape::envelope));
        assert_eq!(state.preview().map(Shape::id), before.as_ref().map(Shape::id));

        state.release(&mut store);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(0).map(Shape::envelope),
            Some(Envelope::new(Point::new(1.0, 1.0), Point::new(6.0, 3.0)))
        );
    }

    #[test]
    fn test_press_on_shape_requests_moving() {
        let mut store = ShapeStore::new();
        let tools = ToolManager::new();
        store.add(tools.create_shape(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 0));

        let mut state = DrawingState::new();
        let next = state.press(Point::new(10.0, 5.0), &store);
        assert!(matches!(next, Some(InteractionState::Moving(_))));
        assert!(!state.is_drawing());
    }

    #[test]
    fn test_preview_uses_active_kind() {
        let store = ShapeStore::new();
        let mut tools = ToolManager::new();
        tools.set_shape_kind(ShapeKind::Line);
        let mut state = DrawingState::new();

        state.press(Point::ZERO, &store);
        state.drag(Point::new(1.0, 1.0), &store, &tools);
        tools.set_shape_kind(ShapeKind::Ellipse);
        state.drag(Point::new(2.0, 2.0), &store, &tools);

        assert_eq!(state.preview().map(Shape::kind), Some(ShapeKind::Ellipse));
    }
}
