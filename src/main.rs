//! Terminal Lines runner (default binary).
//!
//! Reads the game config from the environment, then runs a fixed-timestep
//! loop: poll input until the next tick, advance the move animation, render.
//!
//! Logging is off unless `LINES_LOG` names a file; the filter comes from
//! `RUST_LOG` (default `info`).

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, MouseButton, MouseEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lines::core::{ClickOutcome, GameConfig, GameSnapshot, GameState};
use lines::input::{map_key, should_quit, Cursor};
use lines::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use lines::types::{Pos, UiAction, TICK_MS};

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env().context("invalid game configuration")?;
    let seed = std::env::var("LINES_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(seed_from_clock);
    let game = GameState::new(config, seed)?;
    info!(seed, "starting terminal session");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("LINES_LOG") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot open log file {}", path.to_string_lossy()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn seed_from_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let mut cursor = Cursor::new(game.config().board_size);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut viewport = current_viewport();

    loop {
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Some(cursor.pos()), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key(key) {
                        Some(UiAction::Cursor(dir)) => {
                            cursor.step(dir);
                        }
                        Some(UiAction::Select) => click(&mut game, cursor.pos()),
                        Some(UiAction::Restart) => game.restart(),
                        None => {}
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = game.config().board_size;
                    if let Some(pos) = view.cell_at(size, viewport, mouse.column, mouse.row) {
                        cursor.set(pos);
                        click(&mut game, pos);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
            if let Some(report) = game.take_last_event() {
                if report.score_gained > 0 {
                    info!(gained = report.score_gained, score = game.score(), "scored");
                }
            }
        }
    }
}

fn click(game: &mut GameState, pos: Pos) {
    match game.click(pos) {
        Ok(ClickOutcome::NoPath) => info!(%pos, "no path"),
        Ok(_) => {}
        Err(err) => warn!(%err, "click rejected"),
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
