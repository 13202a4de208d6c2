//! Snake game data structures.
//!
//! The whole simulation lives in one value object; every transition over
//! it is a free function in [`crate::game::logic`].

use crate::constants::GRID_SIZE;
use rand::Rng;
use std::collections::VecDeque;

/// Top-level game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Created but not yet steered; the first directional input starts play.
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// What ended the game. Not an error, a normal terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// Head left the grid bounds.
    Wall,
    /// Head landed on a cell occupied by the body.
    SelfHit,
}

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) unit delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A cell on the grid. Signed so an off-grid candidate head is
/// representable before the bounds check rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < GRID_SIZE && self.y >= 0 && self.y < GRID_SIZE
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub phase: GamePhase,
    /// Set exactly when `phase == GameOver`.
    pub over_cause: Option<GameOverCause>,

    /// Snake body segments. Head is at the front (index 0).
    pub snake: VecDeque<Position>,
    /// Direction applied on the most recent step.
    pub direction: Direction,
    /// Buffered next direction; a later steer overwrites an earlier one
    /// within the same step window.
    pub next_direction: Direction,

    pub food: Position,
    pub score: u32,

    /// Sub-step time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total movement steps taken.
    pub tick_count: u64,
}

impl SnakeGame {
    /// Create a fresh game: length-1 snake at the grid center, heading up,
    /// random food, waiting in `Idle` for the first directional input.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let center = Position {
            x: GRID_SIZE / 2,
            y: GRID_SIZE / 2,
        };
        let mut snake = VecDeque::new();
        snake.push_back(center);

        Self {
            phase: GamePhase::Idle,
            over_cause: None,

            snake,
            direction: Direction::Up,
            next_direction: Direction::Up,

            food: spawn_food(rng),
            score: 0,

            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }
}

/// Sample a food cell uniformly from the full grid.
///
/// Snake occupancy is NOT excluded: food can land under the body and only
/// becomes collectable once the body moves off that cell.
pub fn spawn_food<R: Rng>(rng: &mut R) -> Position {
    Position {
        x: rng.gen_range(0..GRID_SIZE),
        y: rng.gen_range(0..GRID_SIZE),
    }
}
