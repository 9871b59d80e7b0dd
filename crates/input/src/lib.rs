//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::FrogAction`] and samples
//! at most one pending key per frame without ever blocking the loop.

pub mod map;
pub mod reader;

pub use tui_frogger_types as types;

pub use map::{handle_key_event, should_quit};
pub use reader::{EventSource, InputReader, TerminalEvents};
