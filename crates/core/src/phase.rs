//! Timing phases derived from the accumulated loop time.
//!
//! Both phases are pure functions of `elapsed_ns` (time since the update loop
//! began), so they stay in lockstep with wall time no matter how many frames
//! land inside a period.

use crate::types::{BLINK_PERIOD_NS, PLAYER_GLYPH_A, PLAYER_GLYPH_B};

/// Which half of the blink cycle the player glyph is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlinkPhase {
    #[default]
    First,
    Second,
}

impl BlinkPhase {
    /// First half of every second selects [`BlinkPhase::First`].
    pub fn at(elapsed_ns: u64) -> Self {
        if elapsed_ns % BLINK_PERIOD_NS < BLINK_PERIOD_NS / 2 {
            BlinkPhase::First
        } else {
            BlinkPhase::Second
        }
    }

    pub fn glyph(self) -> char {
        match self {
            BlinkPhase::First => PLAYER_GLYPH_A,
            BlinkPhase::Second => PLAYER_GLYPH_B,
        }
    }
}

/// Edge-triggered obstacle step latch.
///
/// The latch arms while the position inside the tick period is past its
/// midpoint, and fires on the first later observation that falls before the
/// midpoint. Exactly one fire happens per period as long as at least one frame
/// lands in each half. An observation exactly at the midpoint neither arms nor
/// fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepLatch {
    #[default]
    Idle,
    Armed,
}

impl StepLatch {
    /// Feed one frame's accumulated time. Returns `true` when the step fires.
    pub fn observe(&mut self, elapsed_ns: u64, period_ns: u64) -> bool {
        let period_ns = period_ns.max(1);
        let phase = elapsed_ns % period_ns;
        let half = period_ns / 2;

        if phase > half {
            *self = StepLatch::Armed;
            return false;
        }

        if *self == StepLatch::Armed && phase < half {
            *self = StepLatch::Idle;
            return true;
        }

        false
    }

    pub fn is_armed(self) -> bool {
        self == StepLatch::Armed
    }
}
