//! Terminal key handling: maps crossterm events to game inputs.

use crate::core::constants::DUCK_HOLD_MS;
use crate::game::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the main loop should do with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(GameInput),
    Quit,
}

/// Translate a key event. Auto-repeat only matters for Down (keeps ducking).
pub fn map_key_event(key: KeyEvent) -> Option<KeyAction> {
    let ctrl_c =
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);

    match (key.code, key.kind) {
        _ if ctrl_c && key.kind == KeyEventKind::Press => Some(KeyAction::Quit),
        (KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc, KeyEventKind::Press) => {
            Some(KeyAction::Quit)
        }
        (KeyCode::Char(' ') | KeyCode::Up, KeyEventKind::Press) => {
            Some(KeyAction::Game(GameInput::JumpPressed))
        }
        (KeyCode::Down, KeyEventKind::Press | KeyEventKind::Repeat) => {
            Some(KeyAction::Game(GameInput::DuckPressed))
        }
        (KeyCode::Down, KeyEventKind::Release) => Some(KeyAction::Game(GameInput::DuckReleased)),
        _ => None,
    }
}

/// Synthesises Down releases on terminals that never report them.
///
/// Every Down press (including auto-repeat) re-arms a countdown; when it runs
/// out the runner stands back up.
#[derive(Debug, Clone)]
pub struct DuckHold {
    hold_ms: u64,
    remaining_ms: Option<u64>,
}

impl Default for DuckHold {
    fn default() -> Self {
        Self::new(DUCK_HOLD_MS)
    }
}

impl DuckHold {
    pub fn new(hold_ms: u64) -> Self {
        Self {
            hold_ms,
            remaining_ms: None,
        }
    }

    pub fn on_duck_pressed(&mut self) {
        self.remaining_ms = Some(self.hold_ms);
    }

    pub fn is_holding(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Count down by `dt_ms`; yields a release once the hold expires.
    pub fn advance(&mut self, dt_ms: u64) -> Option<GameInput> {
        let remaining = self.remaining_ms?;
        if dt_ms >= remaining {
            self.remaining_ms = None;
            Some(GameInput::DuckReleased)
        } else {
            self.remaining_ms = Some(remaining - dt_ms);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_jump_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up] {
            assert_eq!(
                map_key_event(key(code, KeyEventKind::Press)),
                Some(KeyAction::Game(GameInput::JumpPressed))
            );
            // Held jump key does not bounce
            assert_eq!(map_key_event(key(code, KeyEventKind::Repeat)), None);
            assert_eq!(map_key_event(key(code, KeyEventKind::Release)), None);
        }
    }

    #[test]
    fn test_duck_press_and_release() {
        assert_eq!(
            map_key_event(key(KeyCode::Down, KeyEventKind::Press)),
            Some(KeyAction::Game(GameInput::DuckPressed))
        );
        assert_eq!(
            map_key_event(key(KeyCode::Down, KeyEventKind::Repeat)),
            Some(KeyAction::Game(GameInput::DuckPressed))
        );
        assert_eq!(
            map_key_event(key(KeyCode::Down, KeyEventKind::Release)),
            Some(KeyAction::Game(GameInput::DuckReleased))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_key_event(key(KeyCode::Char('q'), KeyEventKind::Press)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            map_key_event(key(KeyCode::Esc, KeyEventKind::Press)),
            Some(KeyAction::Quit)
        );

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key_event(ctrl_c), Some(KeyAction::Quit));

        // Plain 'c' does nothing
        assert_eq!(
            map_key_event(key(KeyCode::Char('c'), KeyEventKind::Press)),
            None
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(
            map_key_event(key(KeyCode::Left, KeyEventKind::Press)),
            None
        );
        assert_eq!(
            map_key_event(key(KeyCode::Enter, KeyEventKind::Press)),
            None
        );
    }

    #[test]
    fn test_duck_hold_expires() {
        let mut hold = DuckHold::new(100);
        assert_eq!(hold.advance(16), None);

        hold.on_duck_pressed();
        assert!(hold.is_holding());
        assert_eq!(hold.advance(60), None);
        assert_eq!(hold.advance(40), Some(GameInput::DuckReleased));
        assert!(!hold.is_holding());
        assert_eq!(hold.advance(40), None);
    }

    #[test]
    fn test_duck_hold_rearmed_by_repeat() {
        let mut hold = DuckHold::new(100);
        hold.on_duck_pressed();
        assert_eq!(hold.advance(90), None);

        // Auto-repeat press arrives before expiry
        hold.on_duck_pressed();
        assert_eq!(hold.advance(90), None);
        assert_eq!(hold.advance(10), Some(GameInput::DuckReleased));
    }
}
