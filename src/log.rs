//! In-app event log shown in the info panel.

use crate::constants::{EVENT_LOG_CAPACITY, FOOD_SCORE};
use crate::game::logic::GameEvent;
use crate::game::types::GameOverCause;
use std::collections::VecDeque;

/// Bounded history of notable game events, newest last.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: VecDeque<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a game event's display line, if it has one. Plain moves are
    /// not logged (one every 150 ms would drown everything else).
    pub fn record(&mut self, event: &GameEvent) {
        let message = match event {
            GameEvent::Moved => return,
            GameEvent::Started => "Game on. Eat the food, dodge the walls.".to_string(),
            GameEvent::FoodEaten { score } => {
                format!("Ate food (+{FOOD_SCORE}), score {score}")
            }
            GameEvent::GameOver {
                cause: GameOverCause::Wall,
                score,
            } => format!("Hit the wall. Final score {score}"),
            GameEvent::GameOver {
                cause: GameOverCause::SelfHit,
                score,
            } => format!("Ran into yourself. Final score {score}"),
            GameEvent::Paused => "Paused".to_string(),
            GameEvent::Resumed => "Resumed".to_string(),
            GameEvent::NewGame => "New game".to_string(),
        };
        self.push(message);
    }

    pub fn push(&mut self, message: String) {
        self.entries.push_back(message);
        while self.entries.len() > EVENT_LOG_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
