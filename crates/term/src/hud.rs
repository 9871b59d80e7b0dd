//! Text overlays drawn straight to the terminal: stats, diagnostics and the
//! finish line.

use arrayvec::ArrayVec;

use crate::core::GameState;
use crate::engine::FrameTimings;
use crate::types::FINISH_GLYPH;

/// Longest overlay (the debug view).
pub const HUD_LINES: usize = 4;

pub type HudLines = ArrayVec<String, HUD_LINES>;

/// Overlay text for the top-left corner of the screen.
///
/// The debug view shows the timings of the frame that just finished pacing;
/// otherwise the win and death counters.
pub fn hud_lines(state: &GameState, timings: &FrameTimings) -> HudLines {
    let mut lines = HudLines::new();
    if state.debug() {
        lines.push(format!("{:<20}: {:.2}", "FPS", timings.fps()));
        lines.push(format!("{:<20}: {:.3}", "Elapsed(ms)", millis(timings.elapsed)));
        lines.push(format!(
            "{:<20}: {:.3}",
            "Computation(ms)",
            millis(timings.computation)
        ));
        lines.push(format!("{:<20}: {:.3}", "Target(ms)", millis(timings.target)));
    } else {
        lines.push(format!("{:<7}: {}", "Wins", state.wins()));
        lines.push(format!("{:<7}: {}", "Deaths", state.deaths()));
    }
    lines
}

/// The finish line: one glyph per column of the field.
pub fn finish_line(field_length: i32) -> String {
    let len = usize::try_from(field_length).unwrap_or(0);
    std::iter::repeat(FINISH_GLYPH).take(len).collect()
}

fn millis(d: std::time::Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
