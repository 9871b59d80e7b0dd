//! Terminal Frogger (workspace facade crate).
//!
//! This package exposes `tui_frogger::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_frogger_core as core;
pub use tui_frogger_engine as engine;
pub use tui_frogger_input as input;
pub use tui_frogger_term as term;
pub use tui_frogger_types as types;
