//! Bigiots (workspace facade crate).
//!
//! Re-exports the workspace crates as `bigiots::{core,input,term,types}` so the
//! binary, integration tests and benches share one import path.

pub use bigiots_core as core;
pub use bigiots_input as input;
pub use bigiots_term as term;
pub use bigiots_types as types;
