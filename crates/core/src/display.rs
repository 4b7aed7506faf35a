//! Display collaborator - the only way the simulation touches the screen.
//!
//! Core code draws through [`Display`] and reads keys through [`Console`].
//! The terminal crate implements both on a real terminal; tests use a
//! framebuffer or the recorder in this module.

use std::io;

use crate::types::{Glyph, Key, Position};

/// Immediate-mode drawing surface addressed in grid cells.
pub trait Display {
    /// Draw `glyph` at a grid cell.
    fn draw_cell(&mut self, pos: Position, glyph: Glyph) -> io::Result<()>;

    /// Draw `glyph` at a grid cell with the alert (red) attribute.
    fn draw_highlight(&mut self, pos: Position, glyph: Glyph) -> io::Result<()>;

    /// Blank a grid cell.
    fn clear_cell(&mut self, pos: Position) -> io::Result<()> {
        self.draw_cell(pos, Glyph::Empty)
    }

    /// Write text at a terminal column/row (not grid coordinates).
    fn draw_text(&mut self, col: u16, row: u16, text: &str) -> io::Result<()>;

    /// Blank the whole screen.
    fn clear(&mut self) -> io::Result<()>;

    /// Make everything drawn so far visible.
    fn refresh(&mut self) -> io::Result<()>;

    /// Block for `ms` milliseconds.
    fn delay(&mut self, ms: u64);
}

/// A display that can also read keys. Reads block until a key arrives.
pub trait Console: Display {
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Display that discards everything. Used for headless simulation and benches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl Display for NullDisplay {
    fn draw_cell(&mut self, _pos: Position, _glyph: Glyph) -> io::Result<()> {
        Ok(())
    }

    fn draw_highlight(&mut self, _pos: Position, _glyph: Glyph) -> io::Result<()> {
        Ok(())
    }

    fn draw_text(&mut self, _col: u16, _row: u16, _text: &str) -> io::Result<()> {
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn delay(&mut self, _ms: u64) {}
}
