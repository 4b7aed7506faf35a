//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Key`] so the simulation
//! never sees a terminal type.

pub mod map;

pub use bigiots_types as types;

pub use map::{map_key_event, should_quit};
