//! In-memory copy of the playfield as terminal cells.
//!
//! Cells carry an [`Ink`] rather than raw colors; the renderer picks the
//! actual terminal colors when it flushes.

use crate::types::Glyph;

/// How a terminal cell is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ink {
    /// Instructions, prompts and blanks
    #[default]
    Plain,
    Player,
    Enemy,
    Rock,
    /// The player's final cell on a loss
    Crash,
    /// Enemy-on-rock flash
    Alert,
}

impl Ink {
    pub fn for_glyph(glyph: Glyph) -> Self {
        match glyph {
            Glyph::Player => Ink::Player,
            Glyph::Enemy => Ink::Enemy,
            Glyph::Rock => Ink::Rock,
            Glyph::Crash => Ink::Crash,
            Glyph::Empty => Ink::Plain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub ink: Ink,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            ink: Ink::Plain,
        }
    }
}

/// `width` x `height` terminal cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Overwrite one cell. Returns `false` when `(x, y)` is off the buffer.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Write `text` from `(x, y)` rightward, clipped at the edge.
    ///
    /// Returns how many cells were actually written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, ink: Ink) -> u16 {
        let mut written = 0;
        for (col, ch) in (x..).zip(text.chars()) {
            if !self.set(col, y, Cell { ch, ink }) {
                break;
            }
            written += 1;
        }
        written
    }

    /// Characters of row `y`, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        let text: String = (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .collect();
        text.trim_end().to_string()
    }
}
