//! Rock field - fixed hazards placed once per round.
//!
//! Rocks are sampled without deduplication: two draws on the same cell stack,
//! and each enemy crash removes only one of them. The field is kept as a
//! count per cell so lookups stay O(1) while preserving that stacking.

use std::collections::HashMap;
use std::io;

use log::debug;
use rand::Rng;

use crate::display::Display;
use crate::rng::random_cell;
use crate::types::{Glyph, GridSize, Position};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RockField {
    cells: HashMap<Position, usize>,
    total: usize,
}

impl RockField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field from explicit positions; repeated positions stack.
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut field = Self::new();
        for pos in positions {
            field.add(pos);
        }
        field
    }

    /// Sample `count` rocks uniformly and draw each one.
    pub fn place_random<R, D>(
        count: usize,
        grid: GridSize,
        rng: &mut R,
        display: &mut D,
    ) -> io::Result<Self>
    where
        R: Rng + ?Sized,
        D: Display + ?Sized,
    {
        let mut field = Self::new();
        for _ in 0..count {
            let pos = random_cell(rng, grid);
            field.add(pos);
            display.draw_cell(pos, Glyph::Rock)?;
        }
        debug!(
            "placed {} rocks on {} distinct cells",
            field.len(),
            field.distinct_cells()
        );
        Ok(field)
    }

    fn add(&mut self, pos: Position) {
        *self.cells.entry(pos).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Rocks stacked on `pos`
    pub fn count_at(&self, pos: Position) -> usize {
        self.cells.get(&pos).copied().unwrap_or(0)
    }

    /// Remove one rock from `pos`. Returns `false` if the cell held none.
    pub fn consume(&mut self, pos: Position) -> bool {
        let Some(count) = self.cells.get_mut(&pos) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.cells.remove(&pos);
        }
        self.total -= 1;
        true
    }

    /// Total rocks, stacked ones included
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn distinct_cells(&self) -> usize {
        self.cells.len()
    }

    /// Occupied cells, each listed once
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.keys().copied()
    }
}
