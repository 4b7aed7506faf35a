//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole simulation: placement, player movement, enemy
//! pursuit, collision resolution and the round/session state machines. It
//! never talks to a terminal directly; everything visible goes through the
//! [`Display`] and [`Console`] traits.
//!
//! - **Deterministic**: same seed and key sequence produce the same game
//! - **Testable**: any `Display` works, including a recorder or a framebuffer
//!
//! # Module Structure
//!
//! - [`rocks`]: rock field (stacking hazards consumed by enemies)
//! - [`enemies`]: enemy swarm placement and per-tick pursuit
//! - [`player`]: player movement through the direction table
//! - [`round`]: tick state machine (ongoing / lost / won)
//! - [`session`]: instructions, rounds and the retry prompt
//! - [`instructions`]: instruction screen text and layout
//! - [`rng`]: placement randomness
//!
//! # Example
//!
//! ```
//! use bigiots_core::{EnemySwarm, NullDisplay, RockField, Round};
//! use bigiots_core::types::{Key, Position, RoundConfig, RoundOutcome};
//!
//! let mut round = Round::from_parts(
//!     RoundConfig::default(),
//!     Position::new(5, 5),
//!     RockField::new(),
//!     EnemySwarm::from_positions([Position::new(0, 0)]),
//! );
//!
//! let outcome = round.tick(Key::Char('i'), &mut NullDisplay).unwrap();
//! assert_eq!(outcome, RoundOutcome::Ongoing);
//! assert_eq!(round.enemies().positions(), &[Position::new(1, 1)]);
//! ```

pub mod display;
pub mod enemies;
pub mod instructions;
pub mod player;
pub mod rng;
pub mod rocks;
pub mod round;
pub mod session;

pub use bigiots_types as types;

// Re-export commonly used types for convenience
pub use display::{Console, Display, NullDisplay};
pub use enemies::{Advance, EnemySwarm};
pub use player::Player;
pub use rng::{placement_rng, random_cell};
pub use rocks::RockField;
pub use round::{Round, LOSE_MESSAGE, WIN_MESSAGE};
pub use session::{Session, SessionSummary, RETRY_PROMPT};
