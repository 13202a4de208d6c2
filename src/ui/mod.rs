//! Terminal rendering. Reads game state, never mutates it.

pub mod common;
pub mod scene;

use crate::game::types::SnakeGame;
use crate::log::EventLog;
use ratatui::Frame;

/// Draw one frame of the game screen.
pub fn draw(frame: &mut Frame, game: &SnakeGame, log: &EventLog) {
    let area = frame.size();
    scene::render(frame, area, game, log);
}
