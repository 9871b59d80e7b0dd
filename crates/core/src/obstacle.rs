//! Obstacle blocks and the initial band layout.

use crate::types::{GameConfig, Position, BLOCK_WIDTH};

/// A rigid block of [`BLOCK_WIDTH`] cells, addressed by its leading cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    pub lead: Position,
}

impl Obstacle {
    pub const fn new(column: i32, row: i32) -> Self {
        Self {
            lead: Position::new(column, row),
        }
    }

    /// Move one column to the right.
    pub fn advance(&mut self) {
        self.lead.column += 1;
    }

    /// Wrap the leading column back to 0 once it reaches the field edge.
    ///
    /// Returns `true` if the block wrapped.
    pub fn wrap(&mut self, field_length: i32) -> bool {
        if self.lead.column >= field_length {
            self.lead.column = 0;
            return true;
        }
        false
    }

    /// Every cell the block currently covers.
    ///
    /// Trailing cells follow the leading cell and wrap with it, so a block
    /// straddling the right edge also covers the first columns of its row.
    pub fn cells(&self, field_length: i32) -> impl Iterator<Item = Position> + '_ {
        let lead = self.lead;
        (0..BLOCK_WIDTH).map(move |d| {
            let column = if field_length > 0 {
                (lead.column + d).rem_euclid(field_length)
            } else {
                lead.column + d
            };
            Position::new(column, lead.row)
        })
    }

    pub fn covers(&self, position: Position, field_length: i32) -> bool {
        position.row == self.lead.row && self.cells(field_length).any(|c| c == position)
    }
}

/// Generate the starting obstacle field.
///
/// Bands start at row `offset` and repeat every `spacing` rows, `rows` times.
/// Inside a band a block starts every `block_stride` columns, shifted right by
/// the band's row so neighbouring bands are staggered. Order is band order,
/// then column order of generation.
pub fn layout(config: &GameConfig) -> Vec<Obstacle> {
    let mut obstacles = Vec::new();
    if config.field_length <= 0 || config.rows <= 0 {
        return obstacles;
    }

    let spacing = config.spacing.max(1);
    let stride = config.block_stride.max(1) as usize;

    for band in 0..config.rows {
        let row = config.offset + band * spacing;
        for k in (0..config.field_length).step_by(stride) {
            obstacles.push(Obstacle::new((k + row) % config.field_length, row));
        }
    }

    obstacles
}
