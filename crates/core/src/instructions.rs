//! Instruction screen shown before every round.
//!
//! Lines are centered on the screen. Lines starting with `#` lose the marker
//! and start at a fixed column instead, which keeps the key diagrams aligned.

use std::io;

use crate::display::Console;
use crate::types::{Key, CELL_COLUMNS, GRID_HEIGHT, GRID_WIDTH};

/// Column used by `#`-prefixed lines
pub const DIAGRAM_COLUMN: u16 = 20;

pub const INSTRUCTIONS: &[&str] = &[
    "Bigiots Ver 1.0",
    "I created a word bigiot. bigiot means bigot and idiot.",
    "",
    "Mission : kill all bigiots to survive!",
    "[O] -- bigiots, chase player step by step.",
    "[#] -- Rock, die bigiots and player when touched.",
    "[@] -- Player, control for bigiots to crash to rock and survive!",
    "",
    "#Key control:          Tenkey:",
    "#7   8   9             7   8   9",
    "#  \\ | /                 \\ | /",
    "#u - i - o             4 - 5 - 6",
    "#  / | \\                 / | \\",
    "#j   k   l             1   2   3",
    "",
    " 'i' and '5' move bigiots and don't move player",
    "             Good Luck",
    "hit key",
];

/// A line of text placed at a terminal column/row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLine<'a> {
    pub col: u16,
    pub row: u16,
    pub text: &'a str,
}

/// Lay out `lines` on a `cols` x `rows` screen.
pub fn layout<'a>(lines: &[&'a str], cols: u16, rows: u16) -> Vec<PlacedLine<'a>> {
    let top = rows.saturating_sub(lines.len() as u16) / 2;
    lines
        .iter()
        .enumerate()
        .map(|(i, &line)| {
            let (col, text) = match line.strip_prefix('#') {
                Some(rest) => (DIAGRAM_COLUMN, rest),
                None => (cols.saturating_sub(line.chars().count() as u16) / 2, line),
            };
            PlacedLine {
                col,
                row: top + i as u16,
                text,
            }
        })
        .collect()
}

/// Clear the screen, draw the instructions and wait for a key.
pub fn show<C: Console + ?Sized>(console: &mut C) -> io::Result<Key> {
    console.clear()?;
    let cols = GRID_WIDTH as u16 * CELL_COLUMNS;
    for line in layout(INSTRUCTIONS, cols, GRID_HEIGHT as u16) {
        console.draw_text(line.col, line.row, line.text)?;
    }
    console.refresh()?;
    console.read_key()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagram_lines_are_left_aligned() {
        let placed = layout(&["#7   8   9", "abcd"], 80, 23);

        assert_eq!(placed[0].col, DIAGRAM_COLUMN);
        assert_eq!(placed[0].text, "7   8   9");
        assert_eq!(placed[1].col, 38);
        assert_eq!(placed[1].text, "abcd");
    }

    #[test]
    fn block_is_vertically_centered() {
        let placed = layout(INSTRUCTIONS, 80, 23);

        assert_eq!(placed.len(), INSTRUCTIONS.len());
        assert_eq!(placed[0].row, 2);
        assert_eq!(placed.last().unwrap().row, 2 + INSTRUCTIONS.len() as u16 - 1);
    }

    #[test]
    fn overlong_lines_start_at_column_zero() {
        let long = "x".repeat(100);
        let placed = layout(&[long.as_str()], 80, 1);

        assert_eq!(placed[0].col, 0);
        assert_eq!(placed[0].row, 0);
    }
}
