//! Terminal Frogger runner (default binary).
//!
//! Runs the fixed-rate frame loop: sample one key, advance the simulation,
//! paint and diff the scene, pace the frame, then print the overlay.
//! Logs go to stderr and are off unless `RUST_LOG` is set.

use std::io;

use anyhow::Result;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use tui_frogger::core::GameState;
use tui_frogger::engine::FramePacer;
use tui_frogger::input::InputReader;
use tui_frogger::term::{finish_line, hud_lines, GameView, SceneBuffer, TerminalRenderer};
use tui_frogger::types::{FrogAction, GameConfig};

fn main() -> Result<()> {
    init_tracing();

    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    let config = GameConfig::for_terminal(width, height);
    info!(
        width,
        height,
        field_length = config.field_length,
        ticks_per_second = config.ticks_per_second,
        frame_rate = config.frame_rate,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "frame loop aborted");
    }
    result
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut state = GameState::new(config);
    let view = GameView::default();
    let mut input = InputReader::new();
    let mut pacer = FramePacer::new(config.frame_duration());
    let mut next = SceneBuffer::new();
    let finish = finish_line(config.field_length);

    let update_start = pacer.now();

    loop {
        pacer.begin_frame();

        // Input.
        if let Some(action) = input.poll_action()? {
            if action == FrogAction::Quit {
                info!(wins = state.wins(), deaths = state.deaths(), "quit");
                return Ok(());
            }
            if state.apply_action(action) {
                debug!(debug = state.debug(), "overlay toggled");
                term.invalidate();
            }
        }

        // Simulate.
        let outcome = state.update(pacer.now().saturating_duration_since(update_start));
        if outcome.won {
            info!(wins = state.wins(), "finish line reached");
        }
        if outcome.died {
            info!(deaths = state.deaths(), "hit by obstacle");
        }

        // Render.
        view.paint(&state, &mut next);
        term.draw_swap(&mut next)?;
        term.draw_finish_line(state.finish_line(), &finish)?;

        // Pace, then report.
        let timings = pacer.end_frame();
        if timings.over_budget() {
            debug!(
                computation_us = timings.computation.as_micros() as u64,
                target_us = timings.target.as_micros() as u64,
                "frame over budget"
            );
        }
        let hud = hud_lines(&state, &timings);
        term.draw_hud(hud.as_slice())?;
    }
}
