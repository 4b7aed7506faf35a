//! Round controller - owns the player, rocks and enemies for one playthrough.
//!
//! A tick is: move the player, check for a crash, advance the swarm, check
//! again, then declare a win if no enemies are left.

use std::io;

use log::{debug, info};
use rand::Rng;

use crate::display::Display;
use crate::enemies::EnemySwarm;
use crate::player::Player;
use crate::rocks::RockField;
use crate::types::{Glyph, Key, Position, RoundConfig, RoundOutcome};

/// Message drawn at the top-left corner when the player dies
pub const LOSE_MESSAGE: &str = "You Lose ";

/// Message drawn at the top-left corner when every enemy is gone
pub const WIN_MESSAGE: &str = "You Win! ";

#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    player: Player,
    rocks: RockField,
    enemies: EnemySwarm,
    outcome: RoundOutcome,
    ticks: u32,
}

impl Round {
    /// Clear the screen and set up a fresh random round.
    ///
    /// Rocks go down first, then enemies (never on a rock), then the player
    /// at the grid center.
    pub fn start<R, D>(config: RoundConfig, rng: &mut R, display: &mut D) -> io::Result<Self>
    where
        R: Rng + ?Sized,
        D: Display + ?Sized,
    {
        display.clear()?;
        let rocks = RockField::place_random(config.rock_count, config.grid, rng, display)?;
        let enemies =
            EnemySwarm::place_random(config.enemy_count, config.grid, &rocks, rng, display)?;
        let player = Player::new(config.grid.center());
        display.draw_cell(player.position(), Glyph::Player)?;

        debug!(
            "round started: {} rocks, {} enemies, player at {:?}",
            rocks.len(),
            enemies.len(),
            player.position()
        );

        Ok(Self::from_state(config, player, rocks, enemies))
    }

    /// Build a round from explicit positions without drawing anything.
    pub fn from_parts(
        config: RoundConfig,
        player: Position,
        rocks: RockField,
        enemies: EnemySwarm,
    ) -> Self {
        Self::from_state(config, Player::new(player), rocks, enemies)
    }

    fn from_state(
        config: RoundConfig,
        player: Player,
        rocks: RockField,
        enemies: EnemySwarm,
    ) -> Self {
        Self {
            config,
            player,
            rocks,
            enemies,
            outcome: RoundOutcome::Ongoing,
            ticks: 0,
        }
    }

    /// Run one tick with the key the player pressed.
    ///
    /// Every key advances the enemies, including keys that do not move the
    /// player. Once the round is over this returns the final outcome and
    /// changes nothing.
    pub fn tick<D: Display + ?Sized>(&mut self, key: Key, display: &mut D) -> io::Result<RoundOutcome> {
        if self.outcome.is_over() {
            return Ok(self.outcome);
        }
        self.ticks += 1;

        if let Key::Char(c) = key {
            self.player.move_by_key(c, self.config.grid, display)?;
        }
        if self.is_crashed() {
            return Ok(self.end(RoundOutcome::Lost));
        }

        let advance = self.enemies.advance(
            self.player.position(),
            &mut self.rocks,
            self.config.crash_flash_ms,
            display,
        )?;
        if advance.player_hit || self.is_crashed() {
            return Ok(self.end(RoundOutcome::Lost));
        }

        if self.enemies.is_empty() {
            return Ok(self.end(RoundOutcome::Won));
        }
        Ok(RoundOutcome::Ongoing)
    }

    fn end(&mut self, outcome: RoundOutcome) -> RoundOutcome {
        info!(
            "round {} after {} ticks ({} enemies, {} rocks left)",
            outcome.as_str(),
            self.ticks,
            self.enemies.len(),
            self.rocks.len()
        );
        self.outcome = outcome;
        outcome
    }

    /// Player cell shares a cell with an enemy or a rock.
    pub fn is_crashed(&self) -> bool {
        let pos = self.player.position();
        self.enemies.contains(pos) || self.rocks.contains(pos)
    }

    /// Draw the end-of-round marker and message. No-op while ongoing.
    pub fn finish<D: Display + ?Sized>(&self, display: &mut D) -> io::Result<()> {
        match self.outcome {
            RoundOutcome::Lost => {
                display.draw_cell(self.player.position(), Glyph::Crash)?;
                display.draw_text(0, 0, LOSE_MESSAGE)
            }
            RoundOutcome::Won => display.draw_text(0, 0, WIN_MESSAGE),
            RoundOutcome::Ongoing => Ok(()),
        }
    }

    pub fn player(&self) -> Position {
        self.player.position()
    }

    pub fn rocks(&self) -> &RockField {
        &self.rocks
    }

    pub fn enemies(&self) -> &EnemySwarm {
        &self.enemies
    }

    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}
