//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay: the simulation draws into a
//! [`Canvas`] (a framebuffer addressed in grid cells), which remembers the
//! spans each draw touched, and [`TerminalRenderer`] repaints only those.
//!
//! - Keep `core` deterministic and testable
//! - Each grid cell is two terminal columns wide to square up the aspect ratio

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod screen;

pub use bigiots_core as core;
pub use bigiots_input as input;
pub use bigiots_types as types;

pub use canvas::{Canvas, Damage, Span};
pub use fb::{Cell, FrameBuffer, Ink};
pub use renderer::{encode_full, encode_spans, ink_color, TerminalRenderer};
pub use screen::TerminalScreen;
