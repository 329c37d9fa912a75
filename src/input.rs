//! Input Event Handling
//!
//! This module turns winit window events into the handful of events the
//! canvas cares about: expose, button press/release and pointer motion.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};

use crate::geometry::Point;

/// Mouse button as seen by the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Freehand drawing
    Left,
    /// Rectangle stamp
    Right,
    /// Anything else (middle, back, forward, extra buttons)
    Other(MouseButton),
}

impl From<MouseButton> for Button {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::Left,
            MouseButton::Right => Self::Right,
            other => Self::Other(other),
        }
    }
}

/// A canvas input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    /// Window contents need to be shown again
    Expose,
    /// Mouse button pressed at a position
    ButtonPress { button: Button, position: Point },
    /// Mouse button released at a position
    ButtonRelease { button: Button, position: Point },
    /// Pointer moved
    Motion { position: Point },
}

/// Tracks the pointer so button events can carry a position
///
/// winit reports positions only on `CursorMoved`, so presses and releases
/// use the last known cursor position (the origin before any motion).
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Point,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position
    pub fn position(&self) -> Point {
        self.position
    }

    /// Record a cursor move
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> CanvasEvent {
        self.position = Point::from_f64(position.x, position.y);
        CanvasEvent::Motion {
            position: self.position,
        }
    }

    /// Build a press/release event at the tracked position
    pub fn mouse_input(&self, state: ElementState, button: MouseButton) -> CanvasEvent {
        let button = Button::from(button);
        let position = self.position;
        match state {
            ElementState::Pressed => CanvasEvent::ButtonPress { button, position },
            ElementState::Released => CanvasEvent::ButtonRelease { button, position },
        }
    }

    /// Translate a window event, `None` for events the canvas ignores
    pub fn translate(&mut self, event: &WindowEvent) -> Option<CanvasEvent> {
        match event {
            WindowEvent::RedrawRequested => Some(CanvasEvent::Expose),
            WindowEvent::CursorMoved { position, .. } => Some(self.cursor_moved(*position)),
            WindowEvent::MouseInput { state, button, .. } => Some(self.mouse_input(*state, *button)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motion_floors_cursor_position() {
        let mut tracker = PointerTracker::new();
        let event = tracker.cursor_moved(PhysicalPosition::new(12.7, 40.2));
        assert_eq!(
            event,
            CanvasEvent::Motion {
                position: Point::new(12, 40)
            }
        );
        assert_eq!(tracker.position(), Point::new(12, 40));
    }

    #[test]
    fn buttons_use_last_cursor_position() {
        let mut tracker = PointerTracker::new();
        tracker.cursor_moved(PhysicalPosition::new(5.0, 6.0));

        assert_eq!(
            tracker.mouse_input(ElementState::Pressed, MouseButton::Left),
            CanvasEvent::ButtonPress {
                button: Button::Left,
                position: Point::new(5, 6)
            }
        );
        assert_eq!(
            tracker.mouse_input(ElementState::Released, MouseButton::Right),
            CanvasEvent::ButtonRelease {
                button: Button::Right,
                position: Point::new(5, 6)
            }
        );
    }

    #[test]
    fn press_before_any_motion_is_at_origin() {
        let tracker = PointerTracker::new();
        assert_eq!(
            tracker.mouse_input(ElementState::Pressed, MouseButton::Right),
            CanvasEvent::ButtonPress {
                button: Button::Right,
                position: Point::new(0, 0)
            }
        );
    }

    #[test]
    fn other_buttons_are_preserved() {
        assert_eq!(Button::from(MouseButton::Middle), Button::Other(MouseButton::Middle));
        assert_eq!(Button::from(MouseButton::Other(9)), Button::Other(MouseButton::Other(9)));
    }

    #[test]
    fn redraw_translates_to_expose() {
        let mut tracker = PointerTracker::new();
        assert_eq!(
            tracker.translate(&WindowEvent::RedrawRequested),
            Some(CanvasEvent::Expose)
        );
        assert_eq!(tracker.translate(&WindowEvent::Focused(true)), None);
    }
}
