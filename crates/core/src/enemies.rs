//! Enemy swarm - placement and per-tick pursuit.
//!
//! Enemies are processed in insertion order every tick. Order matters: the
//! first enemy to reach the player ends the advance, and pairwise
//! cancellation depends on which enemy claimed a cell first.

use std::collections::HashSet;
use std::io;

use log::{debug, trace};
use rand::Rng;

use crate::display::Display;
use crate::rng::random_cell;
use crate::rocks::RockField;
use crate::types::{Glyph, GridSize, Position};

/// Result of one [`EnemySwarm::advance`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Advance {
    /// An enemy stepped onto the player; the advance stopped there.
    pub player_hit: bool,
    /// Rocks removed from the field this tick, one entry per rock.
    pub rocks_consumed: Vec<Position>,
    /// Enemies destroyed on rocks or by colliding with each other.
    pub enemies_lost: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnemySwarm {
    positions: Vec<Position>,
    occupied: HashSet<Position>,
}

impl EnemySwarm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a swarm from explicit positions, keeping their order.
    ///
    /// Repeated positions are dropped after the first.
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut swarm = Self::new();
        for pos in positions {
            if swarm.occupied.insert(pos) {
                swarm.positions.push(pos);
            }
        }
        swarm
    }

    /// Place `count` enemies on distinct cells free of rocks, drawing each one.
    ///
    /// Rejection sampling with no attempt limit; callers keep `count` well
    /// below the number of rock-free cells.
    pub fn place_random<R, D>(
        count: usize,
        grid: GridSize,
        rocks: &RockField,
        rng: &mut R,
        display: &mut D,
    ) -> io::Result<Self>
    where
        R: Rng + ?Sized,
        D: Display + ?Sized,
    {
        let mut swarm = Self::new();
        let mut attempts = 0u32;
        while swarm.positions.len() < count {
            attempts += 1;
            let pos = random_cell(rng, grid);
            if rocks.contains(pos) || swarm.occupied.contains(&pos) {
                continue;
            }
            swarm.occupied.insert(pos);
            swarm.positions.push(pos);
            display.draw_cell(pos, Glyph::Enemy)?;
        }
        debug!("placed {} enemies in {} samples", swarm.len(), attempts);
        Ok(swarm)
    }

    /// Move every enemy one pursuit step toward `player`.
    ///
    /// Per enemy, in order: clear its old cell, then
    /// - stepping onto the player ends the advance at once (`player_hit`);
    ///   no later enemy moves and neither the swarm nor the rocks change,
    /// - stepping onto a rock flashes a crash glyph for `crash_flash_ms` and
    ///   destroys the enemy; the rock is removed once the loop finishes,
    /// - stepping onto a cell another enemy already took this tick destroys
    ///   both; a third enemy arriving later claims the cell again,
    /// - otherwise the enemy is drawn at its new cell.
    pub fn advance<D: Display + ?Sized>(
        &mut self,
        player: Position,
        rocks: &mut RockField,
        crash_flash_ms: u64,
        display: &mut D,
    ) -> io::Result<Advance> {
        let mut next_positions: Vec<Position> = Vec::with_capacity(self.positions.len());
        let mut claimed: HashSet<Position> = HashSet::with_capacity(self.positions.len());
        let mut pending_rocks: Vec<Position> = Vec::new();
        let mut enemies_lost = 0;

        for &enemy in &self.positions {
            let next = enemy.step_toward(player);
            display.clear_cell(enemy)?;

            if next == player {
                trace!("enemy at {enemy:?} reached the player at {player:?}");
                return Ok(Advance {
                    player_hit: true,
                    ..Advance::default()
                });
            }

            if rocks.contains(next) {
                trace!("enemy at {enemy:?} crashed into rock at {next:?}");
                display.draw_highlight(next, Glyph::Crash)?;
                display.refresh()?;
                display.delay(crash_flash_ms);
                display.clear_cell(next)?;
                pending_rocks.push(next);
                enemies_lost += 1;
                continue;
            }

            if claimed.remove(&next) {
                trace!("enemies collided at {next:?}");
                display.clear_cell(next)?;
                if let Some(i) = next_positions.iter().position(|&p| p == next) {
                    next_positions.remove(i);
                }
                enemies_lost += 2;
                continue;
            }

            claimed.insert(next);
            next_positions.push(next);
            display.draw_cell(next, Glyph::Enemy)?;
        }

        let rocks_consumed: Vec<Position> = pending_rocks
            .into_iter()
            .filter(|&pos| rocks.consume(pos))
            .collect();

        self.positions = next_positions;
        self.occupied = claimed;

        Ok(Advance {
            player_hit: false,
            rocks_consumed,
            enemies_lost,
        })
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.occupied.contains(&pos)
    }

    /// Positions in processing order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::testing::{Op, Recorder};
    use crate::display::NullDisplay;
    use crate::rng::placement_rng;

    fn p(x: i16, y: i16) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn placement_avoids_rocks_and_other_enemies() {
        let grid = GridSize::new(6, 4);
        let rocks = RockField::from_positions((0..6).map(|x| p(x, 0)));
        let mut rng = placement_rng(Some(3));
        let mut display = Recorder::default();

        let swarm = EnemySwarm::place_random(10, grid, &rocks, &mut rng, &mut display).unwrap();

        assert_eq!(swarm.len(), 10);
        let unique: HashSet<_> = swarm.positions().iter().copied().collect();
        assert_eq!(unique.len(), 10);
        for &pos in swarm.positions() {
            assert!(!rocks.contains(pos));
            assert_eq!(display.glyph_at(pos), Glyph::Enemy);
        }
    }

    #[test]
    fn lone_enemy_steps_diagonally() {
        let mut swarm = EnemySwarm::from_positions([p(0, 0)]);
        let mut rocks = RockField::new();
        let mut display = Recorder::default();

        let adv = swarm.advance(p(5, 5), &mut rocks, 100, &mut display).unwrap();

        assert!(!adv.player_hit);
        assert_eq!(swarm.positions(), &[p(1, 1)]);
        assert_eq!(display.glyph_at(p(0, 0)), Glyph::Empty);
        assert_eq!(display.glyph_at(p(1, 1)), Glyph::Enemy);
    }

    #[test]
    fn rock_crash_consumes_rock_and_enemy() {
        let mut swarm = EnemySwarm::from_positions([p(0, 0), p(9, 0)]);
        let mut rocks = RockField::from_positions([p(1, 1)]);
        let mut display = Recorder::default();

        let adv = swarm.advance(p(5, 5), &mut rocks, 100, &mut display).unwrap();

        assert_eq!(adv.rocks_consumed, vec![p(1, 1)]);
        assert_eq!(adv.enemies_lost, 1);
        assert!(!rocks.contains(p(1, 1)));
        assert_eq!(swarm.positions(), &[p(8, 1)]);

        // Flash sequence: highlight, refresh, delay, clear.
        let flash: Vec<_> = display
            .ops
            .iter()
            .skip_while(|op| !matches!(op, Op::Highlight(..)))
            .take(4)
            .cloned()
            .collect();
        assert_eq!(
            flash,
            vec![
                Op::Highlight(p(1, 1), Glyph::Crash),
                Op::Refresh,
                Op::Delay(100),
                Op::Draw(p(1, 1), Glyph::Empty),
            ]
        );
    }

    #[test]
    fn two_enemies_on_one_rock_consume_it_once() {
        let mut swarm = EnemySwarm::from_positions([p(0, 0), p(2, 0)]);
        let mut rocks = RockField::from_positions([p(1, 1)]);

        let adv = swarm.advance(p(1, 5), &mut rocks, 0, &mut NullDisplay).unwrap();

        assert!(swarm.is_empty());
        assert_eq!(adv.enemies_lost, 2);
        assert_eq!(adv.rocks_consumed, vec![p(1, 1)]);
        assert!(rocks.is_empty());
    }

    #[test]
    fn stacked_rock_survives_one_crash() {
        let mut swarm = EnemySwarm::from_positions([p(0, 0)]);
        let mut rocks = RockField::from_positions([p(1, 1), p(1, 1)]);

        swarm.advance(p(5, 5), &mut rocks, 0, &mut NullDisplay).unwrap();

        assert!(swarm.is_empty());
        assert_eq!(rocks.count_at(p(1, 1)), 1);
    }

    #[test]
    fn converging_enemies_annihilate_pairwise() {
        // Both step onto (5, 4) heading for (5, 9).
        let mut swarm = EnemySwarm::from_positions([p(4, 3), p(6, 3)]);
        let mut rocks = RockField::new();
        let mut display = Recorder::default();

        let adv = swarm.advance(p(5, 9), &mut rocks, 0, &mut display).unwrap();

        assert!(swarm.is_empty());
        assert_eq!(adv.enemies_lost, 2);
        assert_eq!(display.glyph_at(p(5, 4)), Glyph::Empty);
    }

    #[test]
    fn third_enemy_reclaims_cancelled_cell() {
        let mut swarm = EnemySwarm::from_positions([p(4, 3), p(6, 3), p(5, 3)]);
        let mut rocks = RockField::new();

        swarm.advance(p(5, 9), &mut rocks, 0, &mut NullDisplay).unwrap();

        assert_eq!(swarm.positions(), &[p(5, 4)]);
    }

    #[test]
    fn player_hit_stops_before_later_enemies() {
        // First enemy is adjacent to the player; the second would hit a rock.
        let mut swarm = EnemySwarm::from_positions([p(4, 4), p(8, 8)]);
        let mut rocks = RockField::from_positions([p(7, 7)]);
        let mut display = Recorder::default();

        let adv = swarm.advance(p(5, 5), &mut rocks, 100, &mut display).unwrap();

        assert!(adv.player_hit);
        assert!(rocks.contains(p(7, 7)));
        assert_eq!(swarm.positions(), &[p(4, 4), p(8, 8)]);
        assert!(!display.ops.iter().any(|op| matches!(op, Op::Highlight(..))));
        assert_eq!(display.ops, vec![Op::Draw(p(4, 4), Glyph::Empty)]);
    }

    #[test]
    fn enemy_level_with_player_moves_on_one_axis() {
        let mut swarm = EnemySwarm::from_positions([p(10, 5)]);
        let mut rocks = RockField::new();

        swarm.advance(p(2, 5), &mut rocks, 0, &mut NullDisplay).unwrap();

        assert_eq!(swarm.positions(), &[p(9, 5)]);
        assert!(swarm.contains(p(9, 5)));
        assert!(!swarm.contains(p(10, 5)));
    }
}
