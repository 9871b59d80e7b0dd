//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input mapping).
//!
//! # Field Layout
//!
//! The playfield is addressed in terminal cells:
//!
//! - **Column**: grows to the right, obstacles wrap at `field_length`
//! - **Row**: grows downwards, the finish line sits near the top
//! - **Field length**: the terminal height at startup (also the finish line width)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_RATE` | 60 | Target frames per second |
//! | `TICKS_PER_SECOND` | 5 | Obstacle advances per second |
//! | `BLINK_PERIOD_NS` | 1e9 | Full player blink cycle |
//!
//! # Examples
//!
//! ```
//! use tui_frogger_types::{FrogAction, GameConfig, Position};
//!
//! let config = GameConfig::for_terminal(80, 24);
//! assert_eq!(config.field_length, 24);
//! assert_eq!(config.start, Position::new(12, 22));
//!
//! let p = Position::new(3, 4).offset(FrogAction::MoveUp.delta());
//! assert_eq!(p, Position::new(3, 3));
//! ```

use std::time::Duration;

/// Target frame rate of the main loop.
pub const FRAME_RATE: u32 = 60;

/// Obstacle advances per second.
pub const TICKS_PER_SECOND: u32 = 5;

/// Nanoseconds per second.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// One full blink cycle of the player glyph.
pub const BLINK_PERIOD_NS: u64 = NANOS_PER_SECOND;

/// Number of obstacle bands.
pub const ROWS: i32 = 3;

/// Rows between two obstacle bands.
pub const SPACING: i32 = 5;

/// Row of the first obstacle band.
pub const OFFSET: i32 = 10;

/// Columns between the starts of two blocks in the same band.
pub const BLOCK_STRIDE: i32 = 10;

/// Row of the finish line.
pub const FINISH_LINE: i32 = 5;

/// Cells covered by one obstacle block.
pub const BLOCK_WIDTH: i32 = 4;

/// Blocks whose leading column is within this many cells of a field edge are not drawn.
pub const EDGE_MARGIN: i32 = 4;

/// Player glyph for the first half of each blink cycle.
pub const PLAYER_GLYPH_A: char = 'O';

/// Player glyph for the second half of each blink cycle.
pub const PLAYER_GLYPH_B: char = '0';

/// Obstacle glyph.
pub const OBSTACLE_GLYPH: char = 'X';

/// Finish line glyph.
pub const FINISH_GLYPH: char = '#';

/// A terminal cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub column: i32,
    pub row: i32,
}

impl Position {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Translate by `(d_column, d_row)`.
    pub const fn offset(self, delta: (i32, i32)) -> Self {
        Self {
            column: self.column + delta.0,
            row: self.row + delta.1,
        }
    }

    /// Row-major ordering key, used to flush cells top-to-bottom, left-to-right.
    pub const fn row_major(self) -> (i32, i32) {
        (self.row, self.column)
    }

    /// Convert to crossterm-style `(x, y)` if the cell exists on a terminal.
    pub fn to_terminal(self) -> Option<(u16, u16)> {
        let x = u16::try_from(self.column).ok()?;
        let y = u16::try_from(self.row).ok()?;
        Some((x, y))
    }
}

/// Player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrogAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ToggleDebug,
    Quit,
}

impl FrogAction {
    /// `(d_column, d_row)` for movement actions, `(0, 0)` otherwise.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            FrogAction::MoveUp => (0, -1),
            FrogAction::MoveDown => (0, 1),
            FrogAction::MoveLeft => (-1, 0),
            FrogAction::MoveRight => (1, 0),
            FrogAction::ToggleDebug | FrogAction::Quit => (0, 0),
        }
    }

    pub const fn is_movement(self) -> bool {
        matches!(
            self,
            FrogAction::MoveUp | FrogAction::MoveDown | FrogAction::MoveLeft | FrogAction::MoveRight
        )
    }
}

/// Game tunables. `Default` matches an 80x24 terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub frame_rate: u32,
    pub ticks_per_second: u32,
    /// Number of obstacle bands.
    pub rows: i32,
    /// Rows between bands.
    pub spacing: i32,
    /// Row of the first band.
    pub offset: i32,
    /// Columns between block starts inside a band.
    pub block_stride: i32,
    pub finish_line: i32,
    /// Obstacle wrap width and finish line length.
    pub field_length: i32,
    /// Where the player spawns and respawns.
    pub start: Position,
}

impl GameConfig {
    /// Size the field from the terminal dimensions queried at startup.
    pub fn for_terminal(_width: u16, height: u16) -> Self {
        let height = i32::from(height);
        Self {
            frame_rate: FRAME_RATE,
            ticks_per_second: TICKS_PER_SECOND,
            rows: ROWS,
            spacing: SPACING,
            offset: OFFSET,
            block_stride: BLOCK_STRIDE,
            finish_line: FINISH_LINE,
            field_length: height,
            start: Position::new(height / 2, (height - 2).max(0)),
        }
    }

    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    pub fn with_field_length(mut self, field_length: i32) -> Self {
        self.field_length = field_length;
        self
    }

    pub fn with_ticks_per_second(mut self, ticks_per_second: u32) -> Self {
        self.ticks_per_second = ticks_per_second;
        self
    }

    /// Desired duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }

    /// Nanoseconds between two obstacle advances.
    pub fn tick_period_ns(&self) -> u64 {
        NANOS_PER_SECOND / u64::from(self.ticks_per_second.max(1))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_terminal(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_sizing() {
        let config = GameConfig::for_terminal(120, 40);
        assert_eq!(config.field_length, 40);
        assert_eq!(config.start, Position::new(20, 38));
        assert_eq!(config.finish_line, FINISH_LINE);
    }

    #[test]
    fn test_tiny_terminal_start_row_is_clamped() {
        let config = GameConfig::for_terminal(10, 1);
        assert_eq!(config.start.row, 0);
    }

    #[test]
    fn test_tick_period() {
        let config = GameConfig::default();
        assert_eq!(config.tick_period_ns(), 200_000_000);
        assert_eq!(config.with_ticks_per_second(0).tick_period_ns(), NANOS_PER_SECOND);
    }

    #[test]
    fn test_frame_duration_is_sixtieth() {
        let d = GameConfig::default().frame_duration();
        assert!((d.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_action_deltas() {
        assert_eq!(FrogAction::MoveUp.delta(), (0, -1));
        assert_eq!(FrogAction::MoveDown.delta(), (0, 1));
        assert_eq!(FrogAction::MoveLeft.delta(), (-1, 0));
        assert_eq!(FrogAction::MoveRight.delta(), (1, 0));
        assert_eq!(FrogAction::ToggleDebug.delta(), (0, 0));
    }

    #[test]
    fn test_only_moves_are_movement() {
        assert!(FrogAction::MoveUp.is_movement());
        assert!(FrogAction::MoveDown.is_movement());
        assert!(FrogAction::MoveLeft.is_movement());
        assert!(FrogAction::MoveRight.is_movement());
        assert!(!FrogAction::ToggleDebug.is_movement());
        assert!(!FrogAction::Quit.is_movement());
    }

    #[test]
    fn test_negative_positions_are_not_on_terminal() {
        assert_eq!(Position::new(-1, 3).to_terminal(), None);
        assert_eq!(Position::new(2, -5).to_terminal(), None);
        assert_eq!(Position::new(2, 5).to_terminal(), Some((2, 5)));
    }
}
