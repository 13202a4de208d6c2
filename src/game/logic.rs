//! Snake game logic: steering, pause/reset controls, movement, collision.
//!
//! Every transition is a free function over `&mut SnakeGame` returning the
//! [`GameEvent`]s it produced; the host loop forwards those to the event
//! log and the renderer just re-reads the state.

use super::types::{spawn_food, Direction, GameOverCause, GamePhase, SnakeGame};
use crate::constants::{FOOD_SCORE, MAX_FRAME_MS, TICK_INTERVAL_MS};
use rand::Rng;

/// Notification emitted by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// First directional input arrived; the game is now running.
    Started,
    /// One step completed without incident.
    Moved,
    /// Food consumed this step; `score` is the new total.
    FoodEaten { score: u32 },
    GameOver { cause: GameOverCause, score: u32 },
    Paused,
    Resumed,
    NewGame,
}

/// Request a direction change.
///
/// In `Idle` this also starts the game (the first input both starts and
/// steers). The change is buffered and applied on the next step; it is
/// dropped when it would reverse the current direction, and ignored
/// entirely while paused or after game over.
pub fn steer(game: &mut SnakeGame, dir: Direction) -> Option<GameEvent> {
    match game.phase {
        GamePhase::Paused | GamePhase::GameOver => None,
        GamePhase::Idle => {
            game.phase = GamePhase::Playing;
            if dir != game.direction.opposite() {
                game.next_direction = dir;
            }
            Some(GameEvent::Started)
        }
        GamePhase::Playing => {
            if dir != game.direction.opposite() {
                game.next_direction = dir;
            }
            None
        }
    }
}

/// Flip between Playing and Paused. No effect before the first input or
/// after game over.
pub fn toggle_pause(game: &mut SnakeGame) -> Option<GameEvent> {
    match game.phase {
        GamePhase::Playing => {
            game.phase = GamePhase::Paused;
            Some(GameEvent::Paused)
        }
        GamePhase::Paused => {
            game.phase = GamePhase::Playing;
            Some(GameEvent::Resumed)
        }
        GamePhase::Idle | GamePhase::GameOver => None,
    }
}

/// Return to the canonical initial state (fresh food cell included),
/// from any phase.
pub fn reset<R: Rng>(game: &mut SnakeGame, rng: &mut R) -> GameEvent {
    *game = SnakeGame::new(rng);
    GameEvent::NewGame
}

/// Advance the simulation by `dt_ms` milliseconds of wall time.
///
/// Steps movement in fixed [`TICK_INTERVAL_MS`] increments; a no-op in
/// every phase but Playing. `dt_ms` is clamped to [`MAX_FRAME_MS`] so a
/// lag spike cannot burst-step the snake.
pub fn tick<R: Rng>(game: &mut SnakeGame, dt_ms: u64, rng: &mut R) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if game.phase != GamePhase::Playing {
        return events;
    }

    game.accumulated_time_ms += dt_ms.min(MAX_FRAME_MS);
    while game.accumulated_time_ms >= TICK_INTERVAL_MS {
        game.accumulated_time_ms -= TICK_INTERVAL_MS;
        events.push(step(game, rng));

        if game.phase == GamePhase::GameOver {
            break;
        }
    }
    events
}

/// Single movement step. Exactly one of wall collision, self collision,
/// food eaten, or a plain move happens per call.
fn step<R: Rng>(game: &mut SnakeGame, rng: &mut R) -> GameEvent {
    game.tick_count += 1;

    // Promote the buffered direction
    game.direction = game.next_direction;

    let (dx, dy) = game.direction.delta();
    let head = game.head();
    let new_head = super::types::Position {
        x: head.x + dx,
        y: head.y + dy,
    };

    if !new_head.in_bounds() {
        game.phase = GamePhase::GameOver;
        game.over_cause = Some(GameOverCause::Wall);
        return GameEvent::GameOver {
            cause: GameOverCause::Wall,
            score: game.score,
        };
    }

    // The full current body counts as occupied, tail included: moving
    // onto the tail cell is fatal even though it would vacate this step.
    if game.snake.contains(&new_head) {
        game.phase = GamePhase::GameOver;
        game.over_cause = Some(GameOverCause::SelfHit);
        return GameEvent::GameOver {
            cause: GameOverCause::SelfHit,
            score: game.score,
        };
    }

    game.snake.push_front(new_head);

    if new_head == game.food {
        // Grow (keep the tail) and score
        game.score += FOOD_SCORE;
        game.food = spawn_food(rng);
        GameEvent::FoodEaten { score: game.score }
    } else {
        game.snake.pop_back();
        GameEvent::Moved
    }
}
