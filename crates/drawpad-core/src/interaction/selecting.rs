//! Rubber-band selection.

use crate::geometry::{bounding_box, boxes_intersect, normalized_rect};
use crate::shapes::{Shape, ShapeId};
use crate::store::ShapeStore;
use kurbo::{Point, Rect};

/// Selects every committed shape whose bounding box touches the swept rectangle.
#[derive(Debug, Clone, Default)]
pub struct SelectingState {
    start: Point,
    end: Point,
    selecting: bool,
}

impl SelectingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// The normalized sweep rectangle while a sweep is in progress.
    pub fn selection_rect(&self) -> Option<Rect> {
        self.selecting.then(|| normalized_rect(self.start, self.end))
    }

    pub(super) fn press(&mut self, point: Point, store: &mut ShapeStore) {
        store.clear_selection();
        self.start = point;
        self.end = point;
        self.selecting = true;
    }

    pub(super) fn drag(&mut self, point: Point, store: &mut ShapeStore) {
        if !self.selecting || point == self.end {
            return;
        }
        self.end = point;
        self.select_shapes(store);
    }

    pub(super) fn release(&mut self, store: &ShapeStore) {
        if self.selecting {
            log::debug!("Sweep finished with {} shapes selected", store.selection_len());
        }
        self.selecting = false;
    }

    /// Recompute the whole selection from the current rectangle.
    fn select_shapes(&self, store: &mut ShapeStore) {
        store.clear_selection();

        let rect = normalized_rect(self.start, self.end);
        let hits: Vec<ShapeId> = store
            .shapes()
            .iter()
            .filter(|s| boxes_intersect(bounding_box(s), rect))
            .map(Shape::id)
            .collect();
        for id in hits {
            store.select(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Envelope, SerializableColor, ShapeKind};

    fn store() -> ShapeStore {
        let mut store = ShapeStore::new();
        for (id, x) in [(0, 0.0), (1, 20.0), (2, 40.0)] {
            store.add(Shape::new(
                id,
                ShapeKind::Rectangle,
                Envelope::new(Point::new(x + 10.0, 10.0), Point::new(x, 0.0)),
                SerializableColor::black(),
            ));
        }
        store
    }

    #[test]
    fn test_sweep_selects_intersecting() {
        let mut store = store();
        let mut state = SelectingState::new();

        state.press(Point::new(5.0, 5.0), &mut store);
        state.drag(Point::new(25.0, 6.0), &mut store);
        assert_eq!(store.selected_ids(), vec![0, 1]);

        // Shrinking the sweep drops shapes again.
        state.drag(Point::new(8.0, 6.0), &mut store);
        assert_eq!(store.selected_ids(), vec![0]);

        state.release(&store);
        assert!(!state.is_selecting());
        assert_eq!(store.selected_ids(), vec![0]);
    }

    #[test]
    fn test_reverse_sweep_is_normalized() {
        let mut store = store();
        let mut state = SelectingState::new();

        state.press(Point::new(55.0, 20.0), &mut store);
        state.drag(Point::new(35.0, -5.0), &mut store);
        assert_eq!(store.selected_ids(), vec![2]);
        assert_eq!(state.selection_rect(), Some(Rect::new(35.0, -5.0, 55.0, 20.0)));
    }

    #[test]
    fn test_press_clears_previous_selection() {
        let mut store = store();
        store.select(2);
        let mut state = SelectingState::new();

        state.press(Point::new(100.0, 100.0), &mut store);
        assert_eq!(store.selection_len(), 0);
    }

    #[test]
    fn test_edge_touch_selects() {
        let mut store = store();
        let mut state = SelectingState::new();

        state.press(Point::new(30.0, 10.0), &mut store);
        state.drag(Point::new(35.0, 20.0), &mut store);
        assert_eq!(store.selected_ids(), vec![1]);
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut store = store();
        store.select(1);
        let mut state = SelectingState::new();

        state.drag(Point::new(100.0, 100.0), &mut store);
        assert_eq!(store.selected_ids(), vec![1]);
        assert!(state.selection_rect().is_none());
    }
}
