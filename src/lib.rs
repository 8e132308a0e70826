//! Piece stash (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces that
//! only the binary needs: environment configuration, the action journal, and the
//! session loop state.

pub mod app;
pub mod config;
pub mod journal;

pub use piece_stash_core as core;
pub use piece_stash_input as input;
pub use piece_stash_term as term;
pub use piece_stash_types as types;

pub use app::{App, LoopControl};
pub use config::AppConfig;
pub use journal::{Journal, JournalRecord};
