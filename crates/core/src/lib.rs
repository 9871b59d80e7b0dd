//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: every phase is a function of the elapsed loop time
//! - **Testable**: time is passed in, never read from a clock
//! - **Portable**: can run headless
//!
//! # Module Structure
//!
//! - [`game_state`]: player, obstacles, counters and the per-frame update
//! - [`obstacle`]: 4-cell obstacle blocks and the initial band layout
//! - [`phase`]: blink phase and the edge-triggered obstacle step latch
//!
//! # Game Rules
//!
//! - **Bands**: obstacle blocks travel right one column per tick and wrap at the
//!   field edge
//! - **Ticks**: obstacles advance `ticks_per_second` times per second,
//!   independent of the frame rate
//! - **Win**: reaching the finish line row scores a win and respawns the player
//! - **Death**: standing on any obstacle cell scores a death and respawns the player
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tui_frogger_core::GameState;
//! use tui_frogger_types::{FrogAction, GameConfig, Position};
//!
//! let config = GameConfig::default().with_start(Position::new(2, 6));
//! let mut game = GameState::with_obstacles(config, Vec::new());
//!
//! game.apply_action(FrogAction::MoveUp);
//! let outcome = game.update(Duration::from_millis(16));
//!
//! assert!(outcome.won);
//! assert_eq!(game.wins(), 1);
//! ```

pub mod game_state;
pub mod obstacle;
pub mod phase;

pub use tui_frogger_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, StepOutcome};
pub use obstacle::{layout, Obstacle};
pub use phase::{BlinkPhase, StepLatch};
