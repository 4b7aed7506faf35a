//! TerminalScreen: the game console on a real terminal.
//!
//! Drawing goes into a [`Canvas`]; `refresh` hands the canvas's damage to
//! the [`TerminalRenderer`]. Key reads block on crossterm events.

use std::io;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use crate::canvas::Canvas;
use crate::core::{Console, Display};
use crate::input::map_key_event;
use crate::renderer::TerminalRenderer;
use crate::types::{Glyph, Key, Position};

pub struct TerminalScreen {
    canvas: Canvas,
    renderer: TerminalRenderer,
    active: bool,
}

impl TerminalScreen {
    /// Switch the terminal to raw mode and the alternate screen.
    pub fn enter() -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer
            .enter()
            .context("failed to prepare the terminal")?;
        Ok(Self {
            canvas: Canvas::default(),
            renderer,
            active: true,
        })
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.renderer
            .exit()
            .context("failed to restore the terminal")
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

impl Display for TerminalScreen {
    fn draw_cell(&mut self, pos: Position, glyph: Glyph) -> io::Result<()> {
        self.canvas.draw_cell(pos, glyph)
    }

    fn draw_highlight(&mut self, pos: Position, glyph: Glyph) -> io::Result<()> {
        self.canvas.draw_highlight(pos, glyph)
    }

    fn draw_text(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        self.canvas.draw_text(col, row, text)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.canvas.clear()
    }

    fn refresh(&mut self) -> io::Result<()> {
        let damage = self.canvas.take_damage();
        self.renderer.present(self.canvas.framebuffer(), &damage)
    }

    fn delay(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

impl Console for TerminalScreen {
    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(key) = map_key_event(key) {
                        return Ok(key);
                    }
                }
                Event::Resize(..) => {
                    self.canvas.invalidate();
                    self.refresh()?;
                }
                _ => {}
            }
        }
    }
}
