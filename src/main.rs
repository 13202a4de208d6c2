mod build_info;
mod constants;
mod game;
mod input;
mod log;
mod ui;

use constants::INPUT_POLL_MS;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use game::logic;
use game::types::SnakeGame;
use input::Command;
use log::EventLog;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "serpent {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Serpent - Terminal Snake\n");
                println!("Usage: serpent [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Keys:");
                println!("  WASD / Arrows  Steer (the first press starts the game)");
                println!("  P / Space      Pause or resume");
                println!("  R              Restart");
                println!("  Q / Esc        Quit");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'serpent --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut rng = rand::thread_rng();
    let mut game = SnakeGame::new(&mut rng);
    let mut event_log = EventLog::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &game, &event_log))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match input::map_key(key_event.code) {
                    Some(Command::Steer(dir)) => {
                        if let Some(ev) = logic::steer(&mut game, dir) {
                            event_log.record(&ev);
                        }
                    }
                    Some(Command::TogglePause) => {
                        if let Some(ev) = logic::toggle_pause(&mut game) {
                            event_log.record(&ev);
                        }
                    }
                    Some(Command::Reset) => {
                        let ev = logic::reset(&mut game, &mut rng);
                        event_log.record(&ev);
                    }
                    Some(Command::Quit) => break,
                    None => {}
                }
            }
        }

        // Advance the simulation by the measured frame time; tick() is a
        // no-op in every phase but Playing.
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();
        for ev in logic::tick(&mut game, dt_ms, &mut rng) {
            event_log.record(&ev);
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    Ok(())
}
