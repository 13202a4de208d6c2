//! Integration test: full game flows.
//!
//! Drives the simulation through the public library API the way the
//! binary does (steer, then fixed-interval ticks) under seeded RNGs, and
//! sweeps the core invariants over long random input sequences.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serpent::constants::{FOOD_SCORE, GRID_SIZE, TICK_INTERVAL_MS};
use serpent::game::logic::{reset, steer, tick, toggle_pause, GameEvent};
use serpent::game::types::{Direction, GameOverCause, GamePhase, Position, SnakeGame};
use std::collections::HashSet;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Advance exactly one movement step.
fn step_once(game: &mut SnakeGame, rng: &mut ChaCha8Rng) -> Vec<GameEvent> {
    tick(game, TICK_INTERVAL_MS, rng)
}

fn assert_canonical_initial_state(game: &SnakeGame) {
    assert_eq!(game.phase, GamePhase::Idle);
    assert_eq!(game.snake.len(), 1);
    assert_eq!(game.head(), Position { x: 10, y: 10 });
    assert_eq!(game.direction, Direction::Up);
    assert_eq!(game.next_direction, Direction::Up);
    assert_eq!(game.score, 0);
    assert!(game.over_cause.is_none());
    assert!(game.food.in_bounds());
}

// =============================================================================
// Scripted games
// =============================================================================

#[test]
fn test_first_input_starts_and_steers_the_game() {
    let mut rng = rng(1);
    let mut game = SnakeGame::new(&mut rng);
    game.food = Position { x: 0, y: 0 };

    let started = steer(&mut game, Direction::Left);
    assert_eq!(started, Some(GameEvent::Started));
    assert_eq!(game.phase, GamePhase::Playing);

    step_once(&mut game, &mut rng);
    assert_eq!(game.head(), Position { x: 9, y: 10 });
}

#[test]
fn test_straight_run_into_the_top_wall() {
    let mut rng = rng(2);
    let mut game = SnakeGame::new(&mut rng);
    // Pin the food out of the snake's column so nothing is eaten
    game.food = Position { x: 0, y: 0 };

    steer(&mut game, Direction::Up);

    // Head starts at y = 10: ten steps reach y = 0, the eleventh dies
    let mut steps = 0;
    while game.phase == GamePhase::Playing {
        step_once(&mut game, &mut rng);
        steps += 1;
        assert!(steps <= 11, "game should have ended at the wall");
    }

    assert_eq!(steps, 11);
    assert_eq!(game.phase, GamePhase::GameOver);
    assert_eq!(game.over_cause, Some(GameOverCause::Wall));
    // The failing step leaves the snake where it was
    assert_eq!(game.head(), Position { x: 10, y: 0 });
    assert_eq!(game.snake.len(), 1);
    assert_eq!(game.score, 0);
}

#[test]
fn test_eating_chain_grows_and_scores() {
    let mut rng = rng(3);
    let mut game = SnakeGame::new(&mut rng);
    steer(&mut game, Direction::Up);

    for round in 1..=5u32 {
        // Drop the food directly in the snake's path
        let head = game.head();
        game.food = Position {
            x: head.x,
            y: head.y - 1,
        };

        let events = step_once(&mut game, &mut rng);

        assert_eq!(
            events,
            vec![GameEvent::FoodEaten {
                score: round * FOOD_SCORE
            }]
        );
        assert_eq!(game.score, round * FOOD_SCORE);
        assert_eq!(game.snake.len(), 1 + round as usize);
        assert!(game.food.in_bounds());
    }
}

#[test]
fn test_pause_freezes_the_simulation() {
    let mut rng = rng(4);
    let mut game = SnakeGame::new(&mut rng);
    game.food = Position { x: 0, y: 0 };
    steer(&mut game, Direction::Left);
    step_once(&mut game, &mut rng);

    toggle_pause(&mut game);
    let frozen = game.clone();

    // A long stretch of wall time changes nothing while paused
    for _ in 0..50 {
        assert!(tick(&mut game, TICK_INTERVAL_MS, &mut rng).is_empty());
    }
    assert_eq!(game.snake, frozen.snake);
    assert_eq!(game.score, frozen.score);
    assert_eq!(game.phase, GamePhase::Paused);

    // Resuming picks up where the game left off
    toggle_pause(&mut game);
    assert_eq!(game.phase, GamePhase::Playing);
    let events = step_once(&mut game, &mut rng);
    assert_eq!(events.len(), 1);
}

#[test]
fn test_reset_is_idempotent_from_every_phase() {
    let mut rng = rng(5);

    // Idle
    let mut game = SnakeGame::new(&mut rng);
    reset(&mut game, &mut rng);
    assert_canonical_initial_state(&game);

    // Playing, mid-run
    steer(&mut game, Direction::Right);
    step_once(&mut game, &mut rng);
    reset(&mut game, &mut rng);
    assert_canonical_initial_state(&game);

    // Paused
    steer(&mut game, Direction::Right);
    toggle_pause(&mut game);
    reset(&mut game, &mut rng);
    assert_canonical_initial_state(&game);

    // Game over (run left into the wall)
    steer(&mut game, Direction::Left);
    game.food = Position { x: 19, y: 19 };
    while game.phase == GamePhase::Playing {
        step_once(&mut game, &mut rng);
    }
    assert_eq!(game.phase, GamePhase::GameOver);
    reset(&mut game, &mut rng);
    assert_canonical_initial_state(&game);

    // Repeated resets keep yielding the same canonical state
    reset(&mut game, &mut rng);
    assert_canonical_initial_state(&game);
}

#[test]
fn test_no_events_after_game_over() {
    let mut rng = rng(6);
    let mut game = SnakeGame::new(&mut rng);
    game.food = Position { x: 0, y: 19 };
    steer(&mut game, Direction::Up);

    while game.phase == GamePhase::Playing {
        step_once(&mut game, &mut rng);
    }

    let snapshot = game.clone();
    for _ in 0..20 {
        assert!(tick(&mut game, TICK_INTERVAL_MS, &mut rng).is_empty());
    }
    assert_eq!(game.snake, snapshot.snake);
    assert_eq!(game.score, snapshot.score);
}

// =============================================================================
// Invariant sweep over random play
// =============================================================================

#[test]
fn test_invariants_hold_over_random_play() {
    let mut rng = rng(0xC0FFEE);

    for _ in 0..5 {
        let mut game = SnakeGame::new(&mut rng);
        let dirs = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        steer(&mut game, dirs[rng.gen_range(0..4)]);

        let mut prev_len = game.snake.len();
        let mut prev_direction = game.direction;

        for _ in 0..2_000 {
            if game.phase != GamePhase::Playing {
                break;
            }

            steer(&mut game, dirs[rng.gen_range(0..4)]);
            let events = step_once(&mut game, &mut rng);

            // Exactly one outcome per step
            assert_eq!(events.len(), 1);
            match events[0] {
                GameEvent::Moved => assert_eq!(game.snake.len(), prev_len),
                GameEvent::FoodEaten { score } => {
                    assert_eq!(game.snake.len(), prev_len + 1);
                    assert_eq!(score, game.score);
                }
                GameEvent::GameOver { .. } => assert_eq!(game.phase, GamePhase::GameOver),
                other => panic!("unexpected event from a step: {other:?}"),
            }

            // Length only ever grows, bounded by the grid
            assert!(game.snake.len() >= prev_len);
            assert!(game.snake.len() <= (GRID_SIZE as usize).pow(2));
            prev_len = game.snake.len();

            // The applied direction never reverses the previous one
            assert_ne!(game.direction, prev_direction.opposite());
            prev_direction = game.direction;

            // Score only moves in food-reward increments
            assert_eq!(game.score % FOOD_SCORE, 0);

            if game.phase != GamePhase::GameOver {
                // All segments on the grid, no overlaps while alive
                let distinct: HashSet<Position> = game.snake.iter().copied().collect();
                assert_eq!(distinct.len(), game.snake.len());
                assert!(game.snake.iter().all(Position::in_bounds));
            }
        }
    }
}
