//! Window input → wheel input.
//!
//! minifb only reports the mouse as a polled state (position + button), so
//! [`PointerTranslator`] diffs successive samples into the down / move / up /
//! cancel sequence the gesture tracker expects.  Keyboard shortcuts map to
//! [`Command`]s.

use calibration_wheel::{Point, PointerEvent};
use minifb::Key;

// ════════════════════════════════════════════════════════════════════════════
// MouseSample
// ════════════════════════════════════════════════════════════════════════════

/// The mouse as seen by one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseSample {
    /// `None` while the pointer is outside the window.
    pub position: Option<Point>,
    pub down:     bool,
}

impl MouseSample {
    pub fn at(x: f32, y: f32, down: bool) -> Self {
        MouseSample { position: Some(Point::new(x, y)), down }
    }

    pub fn outside(down: bool) -> Self {
        MouseSample { position: None, down }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PointerTranslator
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Press {
    #[default]
    Released,
    Held,
    /// Cancelled by leaving the window; ignored until the button goes up.
    Abandoned,
}

/// Turns polled mouse samples into pointer events.
#[derive(Clone, Debug, Default)]
pub struct PointerTranslator {
    press: Press,
    last:  Point,
}

impl PointerTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The event implied by `sample`, if any.
    pub fn translate(&mut self, sample: MouseSample) -> Option<PointerEvent> {
        match (self.press, sample.position, sample.down) {
            (Press::Released, Some(p), true) => {
                self.press = Press::Held;
                self.last = p;
                Some(PointerEvent::down(p.x, p.y))
            }
            (Press::Held, Some(p), true) => {
                if p == self.last {
                    return None;
                }
                self.last = p;
                Some(PointerEvent::moved(p.x, p.y))
            }
            (Press::Held, Some(p), false) => {
                self.press = Press::Released;
                self.last = p;
                Some(PointerEvent::up(p.x, p.y))
            }
            (Press::Held, None, _) => {
                self.press = Press::Abandoned;
                log::debug!("pointer left the window mid-drag");
                Some(PointerEvent::cancel(self.last.x, self.last.y))
            }
            (Press::Abandoned, _, false) => {
                self.press = Press::Released;
                None
            }
            _ => None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Keyboard commands
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleDrive,
    Quit,
}

pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::V               => Some(Command::ToggleDrive),
        Key::Q | Key::Escape => Some(Command::Quit),
        _                    => None,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use calibration_wheel::PointerAction;

    fn action(e: Option<PointerEvent>) -> Option<PointerAction> {
        e.map(|e| e.action)
    }

    #[test]
    fn press_drag_release() {
        let mut t = PointerTranslator::new();
        assert_eq!(t.translate(MouseSample::at(10.0, 10.0, false)), None);
        assert_eq!(action(t.translate(MouseSample::at(10.0, 10.0, true))), Some(PointerAction::Down));
        let moved = t.translate(MouseSample::at(12.0, 11.0, true)).unwrap();
        assert_eq!(moved.action, PointerAction::Move);
        assert_eq!(moved.position, Point::new(12.0, 11.0));
        assert_eq!(action(t.translate(MouseSample::at(12.0, 11.0, false))), Some(PointerAction::Up));
    }

    #[test]
    fn still_pointer_emits_nothing() {
        let mut t = PointerTranslator::new();
        t.translate(MouseSample::at(5.0, 5.0, true));
        assert_eq!(t.translate(MouseSample::at(5.0, 5.0, true)), None);
    }

    #[test]
    fn hover_without_button_emits_nothing() {
        let mut t = PointerTranslator::new();
        assert_eq!(t.translate(MouseSample::at(1.0, 1.0, false)), None);
        assert_eq!(t.translate(MouseSample::at(2.0, 2.0, false)), None);
        assert_eq!(t.translate(MouseSample::outside(false)), None);
    }

    #[test]
    fn leaving_the_window_cancels_at_last_position() {
        let mut t = PointerTranslator::new();
        t.translate(MouseSample::at(5.0, 5.0, true));
        t.translate(MouseSample::at(8.0, 6.0, true));
        let e = t.translate(MouseSample::outside(true)).unwrap();
        assert_eq!(e.action, PointerAction::Cancel);
        assert_eq!(e.position, Point::new(8.0, 6.0));
    }

    #[test]
    fn returning_while_held_does_not_regrab() {
        let mut t = PointerTranslator::new();
        t.translate(MouseSample::at(5.0, 5.0, true));
        t.translate(MouseSample::outside(true));
        assert_eq!(t.translate(MouseSample::at(5.0, 5.0, true)), None);
        assert_eq!(t.translate(MouseSample::at(6.0, 5.0, true)), None);
        assert_eq!(t.translate(MouseSample::at(6.0, 5.0, false)), None);
        assert_eq!(action(t.translate(MouseSample::at(6.0, 5.0, true))), Some(PointerAction::Down));
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut t = PointerTranslator::new();
        assert_eq!(t.translate(MouseSample::outside(true)), None);
    }

    #[test]
    fn key_bindings() {
        assert_eq!(command_for_key(Key::V), Some(Command::ToggleDrive));
        assert_eq!(command_for_key(Key::Q), Some(Command::Quit));
        assert_eq!(command_for_key(Key::Escape), Some(Command::Quit));
        assert_eq!(command_for_key(Key::A), None);
    }
}
