//! Player - one position driven by the direction keys.

use std::io;

use crate::display::Display;
use crate::types::{Direction, Glyph, GridSize, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pos: Position,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Target cell for `dir`, or `None` if it would leave the grid.
    pub fn try_move(&self, dir: Direction, grid: GridSize) -> Option<Position> {
        let (dx, dy) = dir.delta();
        let next = self.pos.offset(dx, dy);
        grid.contains(next).then_some(next)
    }

    /// Move in `dir` and redraw. Out-of-bounds moves are ignored.
    ///
    /// Returns whether the move was accepted; `Stay` is accepted and redraws
    /// the player in place.
    pub fn move_in<D: Display + ?Sized>(
        &mut self,
        dir: Direction,
        grid: GridSize,
        display: &mut D,
    ) -> io::Result<bool> {
        let Some(next) = self.try_move(dir, grid) else {
            return Ok(false);
        };
        display.clear_cell(self.pos)?;
        self.pos = next;
        display.draw_cell(self.pos, Glyph::Player)?;
        Ok(true)
    }

    /// Move by a raw key; keys outside the direction table do nothing.
    pub fn move_by_key<D: Display + ?Sized>(
        &mut self,
        key: char,
        grid: GridSize,
        display: &mut D,
    ) -> io::Result<bool> {
        match Direction::from_key(key) {
            Some(dir) => self.move_in(dir, grid, display),
            None => Ok(false),
        }
    }
}
