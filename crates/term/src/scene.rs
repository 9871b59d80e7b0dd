//! Sparse scene buffer: the characters one frame wants on screen.

use std::collections::HashMap;

use crate::types::Position;

/// A sparse map from cell coordinate to character.
///
/// Only cells written during a frame are present. Erasing a cell is done by
/// writing `' '`, never by removing the key, so the diff still sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneBuffer {
    cells: HashMap<Position, char>,
}

impl SceneBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, position: Position) -> Option<char> {
        self.cells.get(&position).copied()
    }

    /// Write one cell. A later write to the same cell wins.
    pub fn put(&mut self, position: Position, ch: char) {
        self.cells.insert(position, ch);
    }

    /// Write `s` left to right starting at `position`.
    pub fn put_str(&mut self, position: Position, s: &str) {
        for (dx, ch) in s.chars().enumerate() {
            self.put(position.offset((dx as i32, 0)), ch);
        }
    }

    /// Forget every cell, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.cells.iter().map(|(p, c)| (*p, *c))
    }

    /// Collect into `out` every cell of `self` that `current` does not already
    /// show, in row-major order.
    pub fn diff_into(&self, current: &SceneBuffer, out: &mut Vec<(Position, char)>) {
        out.clear();
        out.extend(
            self.iter()
                .filter(|&(position, ch)| current.get(position) != Some(ch)),
        );
        out.sort_unstable_by_key(|&(position, _)| position.row_major());
    }

    pub fn diff(&self, current: &SceneBuffer) -> Vec<(Position, char)> {
        let mut out = Vec::new();
        self.diff_into(current, &mut out);
        out
    }
}
