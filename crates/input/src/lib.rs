//! Menu input module.
//!
//! The game reads one line per prompt. This crate turns that line into a
//! [`MenuInput`] without touching the session; the caller decides what to do
//! with unknown numbers and non-numeric text.

pub mod map;

pub use piece_stash_types as types;

pub use map::{parse_line, MenuInput};
