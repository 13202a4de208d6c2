//! Keyboard mapping for the game screen.
//!
//! Translates raw `crossterm` key codes into UI-agnostic commands; the
//! host loop decides what each command does in the current phase.

use crate::game::types::Direction;
use crossterm::event::KeyCode;

/// A player command decoded from one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    TogglePause,
    Reset,
    Quit,
}

/// Map a key code to a command. Unrecognized keys map to `None` and are
/// silently ignored by the caller.
pub fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            Some(Command::Steer(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            Some(Command::Steer(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            Some(Command::Steer(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            Some(Command::Steer(Direction::Right))
        }
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
            Some(Command::TogglePause)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
