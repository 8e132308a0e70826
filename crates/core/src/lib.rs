//! Core piece management - pure, deterministic, and testable
//!
//! This crate holds the upcoming-piece queue, the reserve stack, and the five
//! player actions that move pieces between them. It has **zero dependencies** on
//! the terminal or on I/O, making it:
//!
//! - **Deterministic**: the same seed (or kind script) produces the same pieces
//! - **Testable**: every action is a plain method returning a typed result
//! - **Safe**: a rejected action never mutates anything
//!
//! # Module Structure
//!
//! - [`rng`]: LCG random source and the [`KindPicker`] seam
//! - [`source`]: piece generation with per-source monotonic ids
//! - [`queue`]: 5-slot ring buffer, kept full by the session
//! - [`stack`]: 3-slot reserve stack
//! - [`session`]: play / reserve / use / swap-one / swap-three
//! - [`outcome`]: action results and errors
//! - [`snapshot`]: copy-out view for rendering and journaling
//!
//! # Rules
//!
//! - **Refill**: play and reserve each generate exactly one new piece for the queue
//! - **No stack refill**: using a reserved piece leaves the slot empty
//! - **Swaps**: exchange pieces in place; counts never change
//! - **Precedence**: reserve reports an empty queue before a full stack
//!
//! # Example
//!
//! ```
//! use piece_stash_core::{ActionError, ActionOutcome, GameSession};
//!
//! let mut session = GameSession::with_seed(12345);
//! assert_eq!(session.queue().len(), 5);
//!
//! let Ok(ActionOutcome::Reserved(piece)) = session.reserve() else {
//!     panic!("reserve should succeed on a fresh session");
//! };
//! assert_eq!(piece.id, 0);
//! assert_eq!(session.queue().len(), 5);
//!
//! assert_eq!(session.swap_three(), Err(ActionError::SwapImpossible));
//! ```

pub mod outcome;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod source;
pub mod stack;

pub use piece_stash_types as types;

// Re-export commonly used types for convenience
pub use outcome::{ActionError, ActionOutcome, ActionResult};
pub use queue::PieceQueue;
pub use rng::{KindPicker, ScriptedKinds, SimpleRng};
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
pub use source::PieceSource;
pub use stack::ReserveStack;
