//! Game scene rendering.
//!
//! The board uses half-block pixel rendering: each grid cell is one
//! colored pixel, and two vertically adjacent pixels share a terminal
//! cell through `▀` (fg paints the top half, bg the bottom half), so the
//! 20x20 grid fits in ten terminal rows and reads roughly square.

use super::common::{
    create_game_layout, render_center_prompt, render_overlay, render_status_bar,
};
use crate::constants::{GRID_SIZE, TICK_INTERVAL_MS};
use crate::game::types::{GameOverCause, GamePhase, SnakeGame};
use crate::log::EventLog;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HALF_TOP: char = '\u{2580}'; // ▀
const FULL_BLOCK: char = '\u{2588}'; // █

const HEAD_COLOR: Color = Color::Rgb(120, 255, 120);
const BODY_BRIGHT: (f64, f64, f64) = (40.0, 210.0, 40.0);
const BODY_DIM: (f64, f64, f64) = (15.0, 70.0, 15.0);
const EMPTY_BG: Color = Color::Rgb(10, 12, 10);
const BOARD_BORDER: Color = Color::Rgb(80, 80, 80);

/// Render the whole game screen.
pub fn render(frame: &mut Frame, area: Rect, game: &SnakeGame, log: &EventLog) {
    let layout = create_game_layout(frame, area, " Snake ", Color::LightGreen, 28);

    render_board(frame, layout.board, game);

    match game.phase {
        GamePhase::Idle => {
            render_center_prompt(
                frame,
                layout.board,
                "[ Press WASD or an arrow key to start ]",
                Color::White,
            );
        }
        GamePhase::Paused => {
            render_center_prompt(frame, layout.board, "[ Paused ]", Color::Yellow);
        }
        GamePhase::GameOver => render_game_over(frame, layout.board, game),
        GamePhase::Playing => {}
    }

    render_status(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, log);
}

/// Gradient color for a body segment: bright at the neck, dim at the tail.
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

/// Food pulses between dull and bright red on the step counter.
fn food_color(tick_count: u64) -> Color {
    let pulse = ((tick_count % 8) as f64 / 8.0 * std::f64::consts::PI * 2.0).sin();
    let g = (80.0 + pulse * 30.0) as u8;
    let b = (45.0 + pulse * 20.0) as u8;
    Color::Rgb(255, g, b)
}

fn render_board(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let grid = GRID_SIZE as usize;
    let content_rows = grid / 2;
    let board_w = grid as u16 + 2;
    let board_h = content_rows as u16 + 2;
    if area.width < board_w || area.height < board_h {
        return;
    }

    // Color grid in game coordinates
    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; grid]; grid];

    let fx = game.food.x as usize;
    let fy = game.food.y as usize;
    if fx < grid && fy < grid {
        pixels[fy][fx] = Some(food_color(game.tick_count));
    }

    // Snake painted after food: a body segment covering the food cell
    // hides it, which is exactly what the placement rule allows.
    let snake_len = game.snake.len();
    for (i, seg) in game.snake.iter().enumerate() {
        let sx = seg.x as usize;
        let sy = seg.y as usize;
        if sx < grid && sy < grid {
            pixels[sy][sx] = Some(if i == 0 {
                HEAD_COLOR
            } else {
                body_color(i, snake_len)
            });
        }
    }

    let board_rect = Rect::new(
        area.x + (area.width - board_w) / 2,
        area.y + (area.height - board_h) / 2,
        board_w,
        board_h,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BOARD_BORDER))
        .title(Span::styled(
            format!(" Score: {} ", game.score),
            Style::default().fg(Color::White),
        ))
        .title_alignment(Alignment::Center);
    let inner = block.inner(board_rect);
    frame.render_widget(block, board_rect);

    let mut lines: Vec<Line> = Vec::with_capacity(content_rows);
    for term_row in 0..content_rows {
        let top_row = &pixels[term_row * 2];
        let bot_row = &pixels[term_row * 2 + 1];

        // Batch runs of identical (fg, bg) pairs into single spans
        let mut spans: Vec<Span> = Vec::new();
        let mut run = String::new();
        let mut run_fg = Color::Reset;
        let mut run_bg = Color::Reset;

        for (top_c, bot_c) in top_row.iter().zip(bot_row.iter()) {
            let fg = top_c.unwrap_or(EMPTY_BG);
            let bg = bot_c.unwrap_or(EMPTY_BG);
            if (fg != run_fg || bg != run_bg) && !run.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut run),
                    Style::default().fg(run_fg).bg(run_bg),
                ));
            }
            run_fg = fg;
            run_bg = bg;
            run.push(HALF_TOP);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, Style::default().fg(run_fg).bg(run_bg)));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_game_over(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    let cause_text = match game.over_cause {
        Some(GameOverCause::Wall) => "The snake hit the wall.",
        Some(GameOverCause::SelfHit) => "The snake ran into itself.",
        None => "The game ended.",
    };

    let body = [
        Line::from(Span::styled(
            cause_text,
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Final score: {}", game.score),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Play again   [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    render_overlay(frame, area, Color::Red, "GAME OVER", &body);
}

fn render_status(frame: &mut Frame, area: Rect, game: &SnakeGame) {
    match game.phase {
        GamePhase::Idle => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightGreen,
            &[("[WASD/Arrows]", "Start"), ("[Q]", "Quit")],
        ),
        GamePhase::Playing => render_status_bar(
            frame,
            area,
            "Slither!",
            Color::Green,
            &[
                ("[WASD/Arrows]", "Move"),
                ("[P]", "Pause"),
                ("[R]", "Restart"),
                ("[Q]", "Quit"),
            ],
        ),
        GamePhase::Paused => render_status_bar(
            frame,
            area,
            "Paused",
            Color::Yellow,
            &[("[P]", "Resume"), ("[R]", "Restart"), ("[Q]", "Quit")],
        ),
        GamePhase::GameOver => render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[R]", "New game"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &SnakeGame, log: &EventLog) {
    let block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let phase_label = match game.phase {
        GamePhase::Idle => Span::styled("waiting", Style::default().fg(Color::DarkGray)),
        GamePhase::Playing => Span::styled("playing", Style::default().fg(Color::Green)),
        GamePhase::Paused => Span::styled("paused", Style::default().fg(Color::Yellow)),
        GamePhase::GameOver => Span::styled("game over", Style::default().fg(Color::Red)),
    };

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Phase: ", Style::default().fg(Color::DarkGray)),
            phase_label,
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Grid: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{GRID_SIZE}x{GRID_SIZE}"),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{TICK_INTERVAL_MS}ms"),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(HEAD_COLOR)),
            Span::styled("Head", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {FULL_BLOCK} "),
                Style::default().fg(Color::Rgb(
                    BODY_BRIGHT.0 as u8,
                    BODY_BRIGHT.1 as u8,
                    BODY_BRIGHT.2 as u8,
                )),
            ),
            Span::styled("Body", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {FULL_BLOCK} "),
                Style::default().fg(Color::Rgb(255, 80, 45)),
            ),
            Span::styled("Food", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    if !log.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Events:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for entry in log.entries() {
            lines.push(Line::from(Span::styled(
                format!(" {entry}"),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
