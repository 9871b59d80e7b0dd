//! GameView: paints `core::GameState` into a scene buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::scene::SceneBuffer;
use crate::types::{BLOCK_WIDTH, EDGE_MARGIN, OBSTACLE_GLYPH};

/// Writes the per-frame cells of the playfield.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Blocks with a leading column this close to either edge are not drawn.
    edge_margin: i32,
    block: String,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(EDGE_MARGIN, OBSTACLE_GLYPH)
    }
}

impl GameView {
    pub fn new(edge_margin: i32, glyph: char) -> Self {
        Self {
            edge_margin,
            block: std::iter::repeat(glyph).take(BLOCK_WIDTH as usize).collect(),
        }
    }

    /// Whether a block led by `column` is drawn.
    pub fn block_visible(&self, column: i32, field_length: i32) -> bool {
        column > self.edge_margin && column < field_length - self.edge_margin
    }

    /// Paint the current frame into `next`.
    ///
    /// Write order: erase the previous player cell, then (on step frames) every
    /// visible block with a blank just behind it, then the player on top.
    pub fn paint(&self, state: &GameState, next: &mut SceneBuffer) {
        next.put(state.last_player(), ' ');

        if state.stepped() {
            let field_length = state.field_length();
            for obstacle in state.obstacles() {
                if !self.block_visible(obstacle.lead.column, field_length) {
                    continue;
                }
                next.put(obstacle.lead.offset((-1, 0)), ' ');
                next.put_str(obstacle.lead, &self.block);
            }
        }

        next.put(state.player(), state.blink().glyph());
    }
}
