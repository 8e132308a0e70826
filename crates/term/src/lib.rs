//! Terminal view module.
//!
//! Renders a session snapshot into a small framebuffer of styled characters and
//! flushes it to the terminal with crossterm. The view itself is pure so the
//! layout can be tested without a terminal.

pub mod fb;
pub mod game_view;
pub mod message;
pub mod renderer;

pub use piece_stash_core as core;
pub use piece_stash_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use message::{action_message, error_message, outcome_message, EXITING, INVALID_OPTION};
pub use renderer::{encode_full_into, TerminalRenderer};
