//! Session loop driven by a scripted console on a headless canvas.

use std::collections::VecDeque;
use std::io;

use bigiots::core::instructions::{DIAGRAM_COLUMN, INSTRUCTIONS};
use bigiots::core::{placement_rng, Console, Display, Session, RETRY_PROMPT};
use bigiots::term::Canvas;
use bigiots::types::{Glyph, GridSize, Key, Position, RoundConfig};

struct ScriptedConsole {
    canvas: Canvas,
    keys: VecDeque<Key>,
    reads: usize,
}

impl ScriptedConsole {
    fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            canvas: Canvas::default(),
            keys: keys.into_iter().collect(),
            reads: 0,
        }
    }
}

impl Display for ScriptedConsole {
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
        Ok(())
    }

    fn delay(&mut self, _ms: u64) {}
}

impl Console for ScriptedConsole {
    fn read_key(&mut self) -> io::Result<Key> {
        self.reads += 1;
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "out of keys"))
    }
}

/// 5x3 grid, player at (2, 1), one enemy, no rocks: holding still loses
/// within two ticks wherever the enemy lands.
fn tiny() -> RoundConfig {
    RoundConfig {
        grid: GridSize::new(5, 3),
        rock_count: 0,
        enemy_count: 1,
        crash_flash_ms: 0,
    }
}

fn hold(n: usize) -> impl Iterator<Item = Key> {
    std::iter::repeat(Key::Char('i')).take(n)
}

#[test]
fn test_instructions_shown_first() {
    let mut console = ScriptedConsole::new([Key::Interrupt]);
    let mut session = Session::new(tiny(), placement_rng(Some(1)));

    let summary = session.run(&mut console).unwrap();

    assert!(summary.interrupted);
    assert_eq!(summary.rounds, 0);
    let fb = console.canvas.framebuffer();
    let rows: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(rows.iter().any(|r| r.trim() == INSTRUCTIONS[0]));
    let diagram = rows
        .iter()
        .find(|r| r.contains("Key control:"))
        .expect("key diagram row");
    assert_eq!(diagram.find("Key control:"), Some(DIAGRAM_COLUMN as usize));
}

#[test]
fn test_quit_after_one_round() {
    let keys = std::iter::once(Key::Other)
        .chain(hold(2))
        .chain([Key::Char('n')]);
    let mut console = ScriptedConsole::new(keys);
    let mut session = Session::new(tiny(), placement_rng(Some(8)));

    let summary = session.run(&mut console).unwrap();

    assert_eq!(summary.rounds, 1);
    assert_eq!(summary.losses, 1);
    assert_eq!(summary.wins, 0);
    assert!(!summary.interrupted);

    let fb = console.canvas.framebuffer();
    assert!(fb.row_text(0).starts_with("You Lose"));
    assert!(fb.row_text(1).starts_with(RETRY_PROMPT));
}

#[test]
fn test_prompt_ignores_other_keys_and_retries_on_y() {
    let keys = std::iter::once(Key::Other)
        .chain(hold(2))
        .chain([Key::Char('x'), Key::Other, Key::Char('Y'), Key::Char('y')])
        .chain([Key::Other])
        .chain(hold(2))
        .chain([Key::Char('n')]);
    let mut console = ScriptedConsole::new(keys);
    let mut session = Session::new(tiny(), placement_rng(Some(8)));

    let summary = session.run(&mut console).unwrap();

    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.losses, 2);
    assert!(console.keys.is_empty());
}

#[test]
fn test_interrupt_at_prompt() {
    let keys = std::iter::once(Key::Other)
        .chain(hold(2))
        .chain([Key::Char('q'), Key::Interrupt]);
    let mut console = ScriptedConsole::new(keys);
    let mut session = Session::new(tiny(), placement_rng(Some(8)));

    let summary = session.run(&mut console).unwrap();

    assert_eq!(summary.rounds, 1);
    assert!(summary.interrupted);
}

#[test]
fn test_full_size_round_runs_until_keys_run_out() {
    let keys = std::iter::once(Key::Other).chain(hold(5));
    let mut console = ScriptedConsole::new(keys);
    let mut session = Session::new(RoundConfig::default(), placement_rng(Some(99)));

    // Either the round ends within five ticks or the script runs dry.
    match session.run(&mut console) {
        Ok(_) => unreachable!("script never answers the retry prompt"),
        Err(err) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
    }
    assert_eq!(console.reads, 7);
}
