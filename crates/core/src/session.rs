//! Session loop - instructions, a round, the outcome, "try again?".

use std::io;

use log::info;
use rand::Rng;

use crate::display::Console;
use crate::instructions;
use crate::round::Round;
use crate::types::{Key, RoundConfig, RoundOutcome};

/// Prompt drawn on the second screen row after a round ends
pub const RETRY_PROMPT: &str = "Try Again? [y/n]";

/// Rounds played in one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    /// The session ended on Ctrl-C rather than an `n` at the prompt.
    pub interrupted: bool,
}

impl SessionSummary {
    fn record(&mut self, outcome: RoundOutcome) {
        self.rounds += 1;
        match outcome {
            RoundOutcome::Won => self.wins += 1,
            RoundOutcome::Lost => self.losses += 1,
            RoundOutcome::Ongoing => {}
        }
    }
}

enum Answer {
    Retry,
    Quit,
    Interrupt,
}

pub struct Session<R> {
    config: RoundConfig,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(config: RoundConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Play rounds until the player answers `n` or presses Ctrl-C.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            if instructions::show(console)? == Key::Interrupt {
                summary.interrupted = true;
                break;
            }

            let Some(round) = self.play_round(console)? else {
                summary.interrupted = true;
                break;
            };
            summary.record(round.outcome());

            round.finish(console)?;
            console.refresh()?;
            console.draw_text(0, 1, RETRY_PROMPT)?;
            console.refresh()?;

            match ask_retry(console)? {
                Answer::Retry => continue,
                Answer::Quit => break,
                Answer::Interrupt => {
                    summary.interrupted = true;
                    break;
                }
            }
        }

        info!(
            "session over: {} rounds, {} won, {} lost{}",
            summary.rounds,
            summary.wins,
            summary.losses,
            if summary.interrupted { " (interrupted)" } else { "" }
        );
        Ok(summary)
    }

    /// Run one round to its end. `None` when interrupted.
    fn play_round<C: Console + ?Sized>(&mut self, console: &mut C) -> io::Result<Option<Round>> {
        let mut round = Round::start(self.config, &mut self.rng, console)?;
        loop {
            console.refresh()?;
            let key = console.read_key()?;
            if key == Key::Interrupt {
                return Ok(None);
            }
            if round.tick(key, console)?.is_over() {
                return Ok(Some(round));
            }
        }
    }
}

fn ask_retry<C: Console + ?Sized>(console: &mut C) -> io::Result<Answer> {
    loop {
        match console.read_key()? {
            Key::Char('y') => return Ok(Answer::Retry),
            Key::Char('n') => return Ok(Answer::Quit),
            Key::Interrupt => return Ok(Answer::Interrupt),
            _ => {}
        }
    }
}
