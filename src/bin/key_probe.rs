//! Key probe: shows how terminal key events map to game keys.
//!
//! Useful for checking that a keypad sends digits in raw mode. Ctrl-C exits.

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;

use bigiots::input::map_key_event;
use bigiots::types::{Direction, Key};

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = probe();
    let _ = terminal::disable_raw_mode();
    result
}

fn probe() -> Result<()> {
    print!("press keys (Ctrl-C to exit)\r\n");
    loop {
        let Event::Key(raw) = event::read()? else {
            continue;
        };
        let Some(key) = map_key_event(raw) else {
            continue;
        };
        let direction = match key {
            Key::Char(c) => Direction::from_key(c),
            _ => None,
        };
        print!("{:?} -> {:?} -> {:?}\r\n", raw.code, key, direction);
        if key == Key::Interrupt {
            return Ok(());
        }
    }
}
