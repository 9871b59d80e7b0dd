//! Loop timing for the terminal game.
//!
//! The pacer owns the only intentional blocking point of the main loop: the
//! sleep at the end of each frame that holds the loop to its target rate.

pub mod pacer;

pub use tui_frogger_types as types;

pub use pacer::{Clock, FramePacer, FrameTimings, PreciseSleeper, Sleeper, SystemClock};
