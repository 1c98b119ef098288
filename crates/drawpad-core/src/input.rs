//! Pointer events fed to the canvas by the host.

use kurbo::Point;

/// Pointer event type for unified mouse/touch/pen handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        PointerEvent::Down {
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down { position } | PointerEvent::Move { position } => Some(*position),
            PointerEvent::Up => None,
        }
    }
}
