//! Canvas state management.

use crate::input::PointerEvent;
use crate::interaction::{InteractionState, Mode};
use crate::shapes::Shape;
use crate::store::ShapeStore;
use crate::tools::ToolManager;
use kurbo::{Point, Rect};

/// The drawing surface: committed shapes, toolbar settings and the active
/// interaction state.
///
/// Every mutation goes through `&mut Canvas`, so events are processed one at
/// a time and never overlap.
#[derive(Debug, Default)]
pub struct Canvas {
    store: ShapeStore,
    /// Active shape kind, color and factory.
    tools: ToolManager,
    state: InteractionState,
}

impl Canvas {
    /// Create an empty canvas in drawing mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas with the given tool settings.
    pub fn with_tools(tools: ToolManager) -> Self {
        Self {
            tools,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn tools(&self) -> &ToolManager {
        &self.tools
    }

    /// Toolbar settings, changeable between events.
    pub fn tools_mut(&mut self) -> &mut ToolManager {
        &mut self.tools
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Replace the active state. Any gesture in progress is dropped.
    pub fn set_state(&mut self, state: InteractionState) {
        log::debug!("Interaction state {} -> {}", self.state.mode().name(), state.mode().name());
        self.state = state;
    }

    /// Switch to a fresh state for `mode`, as the toolbar does.
    pub fn set_mode(&mut self, mode: Mode) {
        self.set_state(InteractionState::for_mode(mode));
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        if let Some(next) = self.state.handle(event, &mut self.store, &self.tools) {
            self.set_state(next);
        }
    }

    pub fn handle_pointer_down(&mut self, point: Point) {
        self.handle_pointer_event(PointerEvent::Down { position: point });
    }

    pub fn handle_pointer_move(&mut self, point: Point) {
        self.handle_pointer_event(PointerEvent::Move { position: point });
    }

    pub fn handle_pointer_up(&mut self) {
        self.handle_pointer_event(PointerEvent::Up);
    }

    /// Shapes to paint after the last event, in paint order.
    pub fn current_shapes(&self) -> Vec<&Shape> {
        self.state.current_shapes(&self.store)
    }

    /// Selected shapes in committed order.
    pub fn selected_shapes(&self) -> Vec<&Shape> {
        self.store.selected_shapes()
    }

    /// Rubber band of an ongoing selection sweep.
    pub fn selection_rect(&self) -> Option<Rect> {
        self.state.selection_rect()
    }
}
