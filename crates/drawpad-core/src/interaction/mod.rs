//! Pointer interaction state machine.
//!
//! Exactly one state is active. Each pointer event goes through
//! [`InteractionState::handle`], which may return the state to switch to.
//! Anything that must outlive a transition (committed shapes, selection)
//! lives in the [`ShapeStore`] passed in on every call.
//!
//! | state     | press on empty space | press on a shape | release          |
//! |-----------|----------------------|------------------|------------------|
//! | Drawing   | start drag           | -> Moving        | commit preview   |
//! | Selecting | start sweep          | start sweep      | keep selection   |
//! | Moving    | start drag           | start drag       | -> Selecting     |

mod drawing;
mod moving;
mod selecting;

pub use drawing::DrawingState;
pub use moving::MovingState;
pub use selecting::SelectingState;

use crate::input::PointerEvent;
use crate::shapes::Shape;
use crate::store::ShapeStore;
use crate::tools::ToolManager;
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// Which behavior is active, without its transient data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Draw,
    Select,
    Move,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Draw => "draw",
            Mode::Select => "select",
            Mode::Move => "move",
        }
    }
}

/// The active interaction state and its gesture-local fields.
#[derive(Debug, Clone)]
pub enum InteractionState {
    Drawing(DrawingState),
    Selecting(SelectingState),
    Moving(MovingState),
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::drawing()
    }
}

impl InteractionState {
    pub fn drawing() -> Self {
        Self::Drawing(DrawingState::new())
    }

    pub fn selecting() -> Self {
        Self::Selecting(SelectingState::new())
    }

    pub fn moving() -> Self {
        Self::Moving(MovingState::new())
    }

    /// A fresh state for the given mode.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Draw => Self::drawing(),
            Mode::Select => Self::selecting(),
            Mode::Move => Self::moving(),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Drawing(_) => Mode::Draw,
            Self::Selecting(_) => Mode::Select,
            Self::Moving(_) => Mode::Move,
        }
    }

    /// Whether a press-to-release gesture is in progress.
    pub fn is_gesture_active(&self) -> bool {
        match self {
            Self::Drawing(s) => s.is_drawing(),
            Self::Selecting(s) => s.is_selecting(),
            Self::Moving(s) => s.is_moving(),
        }
    }

    /// Apply one pointer event. Returns the state to switch to, if any.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        store: &mut ShapeStore,
        tools: &ToolManager,
    ) -> Option<InteractionState> {
        match (self, event) {
            (Self::Drawing(s), PointerEvent::Down { position }) => s.press(position, store),
            (Self::Drawing(s), PointerEvent::Move { position }) => {
                s.drag(position, store, tools);
                None
            }
            (Self::Drawing(s), PointerEvent::Up) => {
                s.release(store);
                None
            }
            (Self::Selecting(s), PointerEvent::Down { position }) => {
                s.press(position, store);
                None
            }
            (Self::Selecting(s), PointerEvent::Move { position }) => {
                s.drag(position, store);
                None
            }
            (Self::Selecting(s), PointerEvent::Up) => {
                s.release(store);
                None
            }
            (Self::Moving(s), PointerEvent::Down { position }) => {
                s.press(position, store);
                None
            }
            (Self::Moving(s), PointerEvent::Move { position }) => {
                s.drag(position, store);
                None
            }
            (Self::Moving(s), PointerEvent::Up) => Some(s.release()),
        }
    }

    /// Shapes to paint: committed shapes, plus the drawing preview when there is one.
    pub fn current_shapes<'a>(&'a self, store: &'a ShapeStore) -> Vec<&'a Shape> {
        let mut shapes: Vec<&Shape> = store.shapes().iter().collect();
        if let Self::Drawing(s) = self {
            shapes.extend(s.preview());
        }
        shapes
    }

    /// The rubber band of an ongoing sweep.
    pub fn selection_rect(&self) -> Option<Rect> {
        match self {
            Self::Selecting(s) => s.selection_rect(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_drawing() {
        assert_eq!(InteractionState::default().mode(), Mode::Draw);
    }

    #[test]
    fn test_for_mode_round_trip() {
        for mode in [Mode::Draw, Mode::Select, Mode::Move] {
            let state = InteractionState::for_mode(mode);
            assert_eq!(state.mode(), mode);
            assert!(!state.is_gesture_active());
        }
    }

    #[test]
    fn test_only_moving_release_transitions() {
        let tools = ToolManager::new();
        for mode in [Mode::Draw, Mode::Select] {
            let mut store = ShapeStore::new();
            let mut state = InteractionState::for_mode(mode);
            assert!(state.handle(PointerEvent::down(1.0, 1.0), &mut store, &tools).is_none());
            assert!(state.handle(PointerEvent::moved(5.0, 5.0), &mut store, &tools).is_none());
            assert!(state.handle(PointerEvent::Up, &mut store, &tools).is_none());
        }

        let mut store = ShapeStore::new();
        let mut state = InteractionState::moving();
        state.handle(PointerEvent::down(1.0, 1.0), &mut store, &tools);
        let next = state.handle(PointerEvent::Up, &mut store, &tools);
        assert_eq!(next.map(|s| s.mode()), Some(Mode::Select));
    }

    #[test]
    fn test_current_shapes_includes_preview_while_drawing() {
        let tools = ToolManager::new();
        let mut store = ShapeStore::new();
        let mut state = InteractionState::drawing();

        state.handle(PointerEvent::down(0.0, 0.0), &mut store, &tools);
        assert!(state.current_shapes(&store).is_empty());
        state.handle(PointerEvent::moved(3.0, 3.0), &mut store, &tools);
        assert_eq!(state.current_shapes(&store).len(), 1);
        assert!(store.is_empty());

        state.handle(PointerEvent::Up, &mut store, &tools);
        assert_eq!(state.current_shapes(&store).len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_selection_rect_only_while_sweeping() {
        let tools = ToolManager::new();
        let mut store = ShapeStore::new();
        let mut state = InteractionState::selecting();
        assert!(state.selection_rect().is_none());

        state.handle(PointerEvent::down(4.0, 4.0), &mut store, &tools);
        state.handle(PointerEvent::moved(1.0, 9.0), &mut store, &tools);
        assert_eq!(state.selection_rect(), Some(Rect::new(1.0, 4.0, 4.0, 9.0)));

        state.handle(PointerEvent::Up, &mut store, &tools);
        assert!(state.selection_rect().is_none());
    }
}
