//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! Each frame is painted into a sparse [`SceneBuffer`], diffed against the
//! buffer that matches the terminal, and only the changed cells are written.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Minimise terminal writes per frame
//! - Keep the painting step pure so it can be asserted without a terminal

pub mod game_view;
pub mod hud;
pub mod renderer;
pub mod scene;

pub use tui_frogger_core as core;
pub use tui_frogger_engine as engine;
pub use tui_frogger_types as types;

pub use game_view::GameView;
pub use hud::{finish_line, hud_lines, HudLines, HUD_LINES};
pub use renderer::{encode_changes_into, TerminalRenderer};
pub use scene::SceneBuffer;
