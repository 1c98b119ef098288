//! Committed shapes and the current selection.

use crate::geometry::{bounding_box, point_in_box};
use crate::shapes::{Shape, ShapeId};
use kurbo::{Point, Rect, Vec2};
use std::collections::HashSet;

/// Ordered collection of committed shapes plus the ids currently selected.
///
/// Insertion order is paint order. Shapes are only ever appended or moved;
/// nothing here removes one. Every selected id refers to a committed shape.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    selection: HashSet<ShapeId>,
    next_id: ShapeId,
}

impl ShapeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier the next committed shape should carry.
    pub fn next_id(&self) -> ShapeId {
        self.next_id
    }

    /// Append a shape to the committed sequence.
    ///
    /// A shape whose id is already committed is dropped.
    pub fn add(&mut self, shape: Shape) {
        let id = shape.id();
        if self.get(id).is_some() {
            log::warn!("Ignoring shape with duplicate id {}", id);
            return;
        }
        self.next_id = self.next_id.max(id.saturating_add(1));
        log::debug!("Committed {} shape {}", shape.kind().name(), id);
        self.shapes.push(shape);
    }

    /// Committed shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Empty the selection without touching committed shapes.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Add a shape to the selection. Unknown ids are ignored.
    /// Returns true if the shape is selected afterwards.
    pub fn select(&mut self, id: ShapeId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selection.insert(id);
        true
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(&id)
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Selected shapes in committed order.
    pub fn selected_shapes(&self) -> Vec<&Shape> {
        self.shapes
            .iter()
            .filter(|s| self.selection.contains(&s.id()))
            .collect()
    }

    /// Ids of the selected shapes in committed order.
    pub fn selected_ids(&self) -> Vec<ShapeId> {
        self.selected_shapes().into_iter().map(Shape::id).collect()
    }

    /// Move every selected shape by `offset`, in place.
    pub fn translate_selected(&mut self, offset: Vec2) {
        if self.selection.is_empty() {
            return;
        }
        for shape in self.shapes.iter_mut() {
            if self.selection.contains(&shape.id()) {
                shape.translate(offset);
            }
        }
    }

    /// First committed shape whose bounding box contains the point.
    pub fn hit_test(&self, point: Point) -> Option<ShapeId> {
        self.shapes
            .iter()
            .find(|s| point_in_box(point, bounding_box(s)))
            .map(Shape::id)
    }

    /// Get the bounding box of all shapes.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(bounding_box)
            .reduce(|acc, b| acc.union(b))
    }
}
