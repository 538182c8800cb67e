//! Key mapping from terminal events to player actions.

use crate::types::{Direction, PlayerAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to player actions.
///
/// Letters and digits are position characters, except the command keys
/// `n` (new game), `r` (replay) and `q` (quit, see [`should_quit`]).
pub fn handle_key_event(key: KeyEvent) -> Option<PlayerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Cursor
        KeyCode::Up => Some(PlayerAction::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(PlayerAction::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(PlayerAction::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(PlayerAction::MoveCursor(Direction::Right)),

        // Prompt
        KeyCode::Enter | KeyCode::Char(' ') => Some(PlayerAction::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(PlayerAction::Erase),

        // Commands
        KeyCode::Char('n') | KeyCode::Char('N') => Some(PlayerAction::NewGame),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PlayerAction::Replay),
        KeyCode::Char('q') | KeyCode::Char('Q') => None,

        KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
            Some(PlayerAction::Type(c.to_ascii_uppercase()))
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map keyboard input at the seed prompt.
///
/// Every letter and digit is seed text here, including `n`, `r` and `q`.
pub fn handle_seed_key_event(key: KeyEvent) -> Option<PlayerAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Enter => Some(PlayerAction::Submit),
        KeyCode::Backspace | KeyCode::Delete => Some(PlayerAction::Erase),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
            Some(PlayerAction::Type(c.to_ascii_uppercase()))
        }
        _ => None,
    }
}

/// Quit keys at the seed prompt, where `q` is seed text.
pub fn should_quit_seed_entry(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(PlayerAction::MoveCursor(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(PlayerAction::MoveCursor(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(PlayerAction::MoveCursor(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(PlayerAction::MoveCursor(Direction::Down))
        );
    }

    #[test]
    fn test_position_characters() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('b'))),
            Some(PlayerAction::Type('B'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(PlayerAction::Type('D'))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(PlayerAction::Type('3'))
        );
        // Out-of-range characters still reach the prompt so it can explain the error.
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('z'))),
            Some(PlayerAction::Type('Z'))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('-'))), None);
    }

    #[test]
    fn test_prompt_and_command_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(PlayerAction::Submit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(PlayerAction::Erase)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(PlayerAction::NewGame)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(PlayerAction::Replay)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('q'))), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_seed_prompt_keys() {
        for (c, expected) in [('n', 'N'), ('r', 'R'), ('q', 'Q'), ('7', '7')] {
            assert_eq!(
                handle_seed_key_event(KeyEvent::from(KeyCode::Char(c))),
                Some(PlayerAction::Type(expected))
            );
        }
        assert_eq!(
            handle_seed_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(PlayerAction::Submit)
        );
        assert_eq!(handle_seed_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(handle_seed_key_event(KeyEvent::from(KeyCode::Up)), None);

        assert!(!should_quit_seed_entry(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit_seed_entry(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit_seed_entry(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }
}
