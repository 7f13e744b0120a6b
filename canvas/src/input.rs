//! Input model: normalized pointer events and the gesture state machine.
//!
//! The browser host turns mouse, touch and wheel DOM events into
//! [`InputEvent`]s with screen coordinates relative to the canvas origin.
//! `InputState` is the gesture being tracked between pointer-down and
//! pointer-up, carrying the grab offset that keeps the dragged thing from
//! jumping to the pointer.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::cards::CardIndex;

/// Where a pointer event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Mouse (or pen) with a single cursor.
    Mouse,
    /// Touch screen, with the number of fingers currently down.
    Touch { count: u32 },
}

impl Source {
    /// Whether this event describes a single pointer. Multi-finger touches
    /// are ignored by the controller.
    #[must_use]
    pub fn is_single(self) -> bool {
        match self {
            Self::Mouse => true,
            Self::Touch { count } => count == 1,
        }
    }
}

/// Convert a viewport position (`clientX` / `clientY`) into canvas-relative
/// screen coordinates, given the canvas bounding rect's top-left corner.
/// Fractional positions are kept as is.
#[must_use]
pub fn canvas_relative(client_x: f64, client_y: f64, left: f64, top: f64) -> Point {
    Point::new(client_x - left, client_y - top)
}

/// A normalized input event in canvas-relative screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { at: Point, source: Source },
    PointerMove { at: Point, source: Source },
    /// Mouse-up, touch-end or touch-cancel.
    PointerUp,
    /// The pointer left the canvas.
    PointerLeave,
    /// Vertical scroll in pixels; positive scrolls down and zooms out.
    Wheel { at: Point, delta_y: f64 },
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A card is following the pointer.
    DraggingCard {
        /// Store index of the card being dragged.
        index: CardIndex,
        /// World-space vector from the card origin to the grab point.
        grab: Point,
    },
    /// The card layer is following the pointer.
    PanningCanvas {
        /// Screen-space vector from the pan origin to the grab point.
        grab: Point,
    },
}
