//! Dragging the current selection.

use super::InteractionState;
use crate::shapes::ShapeId;
use crate::store::ShapeStore;
use kurbo::Point;

/// Moves the selected shapes along with the pointer, then hands back to selecting.
#[derive(Debug, Clone, Default)]
pub struct MovingState {
    /// Selection at press time. Only checked for presence.
    selection: Option<Vec<ShapeId>>,
    /// Pointer position the next delta is measured from.
    anchor: Point,
    moving: bool,
}

impl MovingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub(super) fn press(&mut self, point: Point, store: &ShapeStore) {
        self.selection = Some(store.selected_ids());
        self.anchor = point;
        self.moving = true;
    }

    pub(super) fn drag(&mut self, point: Point, store: &mut ShapeStore) {
        if !self.moving || point == self.anchor {
            return;
        }
        // delta points from the new position back to the previous one.
        let delta = self.anchor - point;
        self.anchor = point;

        if self.selection.is_some() {
            store.translate_selected(-delta);
        }
    }

    pub(super) fn release(&mut self) -> InteractionState {
        self.moving = false;
        self.selection = None;
        InteractionState::selecting()
    }
}
