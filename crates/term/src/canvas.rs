//! Canvas: a framebuffer addressed in grid cells.
//!
//! This module is pure (no I/O). It implements [`Display`] so the simulation
//! can draw into memory, which is how rendering is unit-tested.
//!
//! Every write also records the terminal span it touched. The screen takes
//! that [`Damage`] on refresh and repaints only those spans; a fresh canvas,
//! `clear` and `invalidate` mark the whole canvas instead.

use std::collections::BTreeSet;
use std::io;
use std::mem;

use crate::core::Display;
use crate::fb::{FrameBuffer, Ink};
use crate::types::{Glyph, Position, CELL_COLUMNS, GRID_HEIGHT, GRID_WIDTH};

/// A horizontal run of terminal cells on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub row: u16,
    pub col: u16,
    pub len: u16,
}

/// What changed since the last refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Damage {
    /// Repaint everything; `spans` is irrelevant when set
    pub full: bool,
    pub spans: BTreeSet<Span>,
}

impl Damage {
    fn everything() -> Self {
        Self {
            full: true,
            spans: BTreeSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.full && self.spans.is_empty()
    }

    fn mark(&mut self, span: Span) {
        if !self.full && span.len > 0 {
            self.spans.insert(span);
        }
    }
}

/// Grid-cell drawing surface backed by a [`FrameBuffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    fb: FrameBuffer,
    damage: Damage,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(GRID_WIDTH as u16 * CELL_COLUMNS, GRID_HEIGHT as u16)
    }
}

impl Canvas {
    /// Canvas of `cols` x `rows` terminal cells, fully damaged.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            fb: FrameBuffer::new(cols, rows),
            damage: Damage::everything(),
        }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn damage(&self) -> &Damage {
        &self.damage
    }

    /// Hand over the pending damage and start tracking afresh.
    pub fn take_damage(&mut self) -> Damage {
        mem::take(&mut self.damage)
    }

    /// Mark the whole canvas for repaint, e.g. after a terminal resize.
    pub fn invalidate(&mut self) {
        self.damage = Damage::everything();
    }

    /// Glyph drawn at a grid cell, if the cell is on the canvas.
    pub fn glyph_char(&self, pos: Position) -> Option<char> {
        let (x, y) = cell_origin(pos)?;
        self.fb.get(x, y).map(|cell| cell.ch)
    }

    /// Ink of a grid cell, if the cell is on the canvas.
    pub fn ink_at(&self, pos: Position) -> Option<Ink> {
        let (x, y) = cell_origin(pos)?;
        self.fb.get(x, y).map(|cell| cell.ink)
    }

    fn put_glyph(&mut self, pos: Position, glyph: Glyph, ink: Ink) {
        let Some((x, y)) = cell_origin(pos) else {
            return;
        };
        let mut text = String::with_capacity(CELL_COLUMNS as usize);
        text.push(glyph.as_char());
        for _ in 1..CELL_COLUMNS {
            text.push(' ');
        }
        self.put_text(x, y, &text, ink);
    }

    fn put_text(&mut self, col: u16, row: u16, text: &str, ink: Ink) {
        let len = self.fb.put_str(col, row, text, ink);
        self.damage.mark(Span { row, col, len });
    }
}

/// Terminal cell of the left column of a grid cell.
fn cell_origin(pos: Position) -> Option<(u16, u16)> {
    let x = u16::try_from(pos.x).ok()?;
    let y = u16::try_from(pos.y).ok()?;
    Some((x.checked_mul(CELL_COLUMNS)?, y))
}

impl Display for Canvas {
    fn draw_cell(&mut self, pos: Position, glyph: Glyph) -> io::Result<()> {
        self.put_glyph(pos, glyph, Ink::for_glyph(glyph));
        Ok(())
    }

    fn draw_highlight(&mut self, pos: Position, glyph: Glyph) -> io::Result<()> {
        self.put_glyph(pos, glyph, Ink::Alert);
        Ok(())
    }

    fn draw_text(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        self.put_text(col, row, text, Ink::Plain);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.fb.clear();
        self.invalidate();
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn delay(&mut self, _ms: u64) {}
}
