//! Bigiots terminal runner (default binary).
//!
//! Parses the command line, optionally sets up file logging, then runs the
//! session loop on the alternate screen until the player quits.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use bigiots::core::{placement_rng, Session};
use bigiots::term::TerminalScreen;
use bigiots::types::RoundConfig;

/// Lure the bigiots into the rocks before they reach you.
#[derive(Parser, Debug)]
#[command(name = "bigiots")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for rock and enemy placement (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut screen = TerminalScreen::enter()?;
    let result = run(&mut screen, args.seed);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TerminalScreen, seed: Option<u64>) -> Result<()> {
    info!("starting session (seed: {seed:?})");
    let mut session = Session::new(RoundConfig::default(), placement_rng(seed));
    session.run(screen).context("session aborted")?;
    Ok(())
}

/// Logs go to a file; the terminal is owned by the game screen.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
