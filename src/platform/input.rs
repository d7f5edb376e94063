//! Input normalization
//!
//! Pointer presses, touches and the space bar all collapse into a single
//! activation intent. Touch devices also fire a compatibility mouse event
//! shortly after each touch; those are dropped here so one tap never counts
//! twice, even when the host could not suppress them.

/// Pointer presses this soon after a touch are treated as synthetic
pub const GHOST_CLICK_WINDOW_MS: f64 = 800.0;

/// Key code that activates
pub const ACTIVATE_KEY: &str = "Space";

/// Raw platform input, already stripped of platform types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent<'a> {
    /// Mouse/pen press; `button` 0 is primary
    PointerDown { button: i16 },
    TouchStart,
    /// `code` is the physical key code (e.g. "Space")
    KeyDown { code: &'a str, repeat: bool },
}

/// What the host should do with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputDecision {
    /// Deliver one activation intent to the game
    pub activate: bool,
    /// Call `preventDefault` (stops scrolling and synthetic mouse events)
    pub prevent_default: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    last_touch_ms: Option<f64>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent<'_>, timestamp_ms: f64) -> InputDecision {
        match event {
            InputEvent::TouchStart => {
                self.last_touch_ms = Some(timestamp_ms);
                InputDecision {
                    activate: true,
                    prevent_default: true,
                }
            }
            InputEvent::PointerDown { button } => {
                let ghost = self.last_touch_ms.is_some_and(|touch| {
                    let since = timestamp_ms - touch;
                    (0.0..GHOST_CLICK_WINDOW_MS).contains(&since)
                });
                if ghost {
                    log::debug!("Dropped synthetic pointer press after touch");
                }
                InputDecision {
                    activate: button == 0 && !ghost,
                    prevent_default: false,
                }
            }
            InputEvent::KeyDown { code, repeat } if code == ACTIVATE_KEY => InputDecision {
                activate: !repeat,
                prevent_default: true,
            },
            InputEvent::KeyDown { .. } => InputDecision::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_source_activates() {
        let mut input = InputAdapter::new();
        assert!(input.handle(InputEvent::PointerDown { button: 0 }, 0.0).activate);
        assert!(input.handle(InputEvent::TouchStart, 10.0).activate);
        let key = InputEvent::KeyDown {
            code: "Space",
            repeat: false,
        };
        assert!(input.handle(key, 2000.0).activate);
    }

    #[test]
    fn test_touch_suppresses_ghost_click() {
        let mut input = InputAdapter::new();
        let touch = input.handle(InputEvent::TouchStart, 1000.0);
        assert!(touch.activate && touch.prevent_default);

        let ghost = input.handle(InputEvent::PointerDown { button: 0 }, 1300.0);
        assert!(!ghost.activate);

        // A real click well after the touch goes through
        let click = input.handle(InputEvent::PointerDown { button: 0 }, 1000.0 + GHOST_CLICK_WINDOW_MS);
        assert!(click.activate);
    }

    #[test]
    fn test_space_prevents_scroll_and_ignores_repeat() {
        let mut input = InputAdapter::new();
        let repeat = input.handle(
            InputEvent::KeyDown {
                code: "Space",
                repeat: true,
            },
            0.0,
        );
        assert_eq!(
            repeat,
            InputDecision {
                activate: false,
                prevent_default: true
            }
        );
    }

    #[test]
    fn test_other_inputs_ignored() {
        let mut input = InputAdapter::new();
        let enter = input.handle(
            InputEvent::KeyDown {
                code: "Enter",
                repeat: false,
            },
            0.0,
        );
        assert_eq!(enter, InputDecision::default());
        assert!(!input.handle(InputEvent::PointerDown { button: 2 }, 0.0).activate);
    }
}
