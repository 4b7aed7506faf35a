//! TerminalRenderer: paints a canvas's damage on a real terminal.
//!
//! Nothing is diffed here. The canvas already knows which spans it wrote, so
//! a refresh repaints those spans, or the whole frame after a clear or a
//! resize.

use std::borrow::Borrow;
use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::canvas::{Damage, Span};
use crate::fb::{FrameBuffer, Ink};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Paint `damage` from `fb`. Empty damage writes nothing.
    pub fn present(&mut self, fb: &FrameBuffer, damage: &Damage) -> io::Result<()> {
        if damage.is_empty() {
            return Ok(());
        }
        self.buf.clear();
        if damage.full {
            encode_full(fb, &mut self.buf)?;
        } else {
            encode_spans(fb, &damage.spans, &mut self.buf)?;
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

/// Encode a whole-screen repaint of `fb` into `out`.
pub fn encode_full(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let rows = (0..fb.height()).map(|row| Span {
        row,
        col: 0,
        len: fb.width(),
    });
    encode_spans(fb, rows, out)
}

/// Encode a repaint of just `spans` into `out`.
pub fn encode_spans<I>(fb: &FrameBuffer, spans: I, out: &mut Vec<u8>) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Borrow<Span>,
{
    let mut pen = Pen::default();
    for span in spans {
        let span = span.borrow();
        out.queue(cursor::MoveTo(span.col, span.row))?;
        for col in span.col..span.col.saturating_add(span.len) {
            let Some(cell) = fb.get(col, span.row) else {
                break;
            };
            pen.switch(out, cell.ink)?;
            out.queue(Print(cell.ch))?;
        }
    }
    if pen.ink.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Current terminal ink, so runs of the same ink emit one style change.
#[derive(Default)]
struct Pen {
    ink: Option<Ink>,
}

impl Pen {
    fn switch(&mut self, out: &mut Vec<u8>, ink: Ink) -> io::Result<()> {
        if self.ink == Some(ink) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(ink_color(ink)))?;
        if is_bold(ink) {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        self.ink = Some(ink);
        Ok(())
    }
}

pub fn ink_color(ink: Ink) -> Color {
    match ink {
        Ink::Plain => Color::Rgb { r: 220, g: 220, b: 220 },
        Ink::Player => Color::Rgb { r: 240, g: 220, b: 80 },
        Ink::Enemy => Color::Rgb { r: 100, g: 220, b: 120 },
        Ink::Rock => Color::Rgb { r: 150, g: 150, b: 160 },
        Ink::Crash => Color::Rgb { r: 255, g: 255, b: 255 },
        Ink::Alert => Color::Rgb { r: 220, g: 60, b: 60 },
    }
}

fn is_bold(ink: Ink) -> bool {
    matches!(ink, Ink::Player | Ink::Crash | Ink::Alert)
}
