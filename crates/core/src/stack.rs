//! Reserve stack - pieces set aside by the player.

use arrayvec::ArrayVec;

use crate::outcome::ActionError;
use crate::types::{Piece, STACK_CAPACITY};

/// Fixed-capacity LIFO of reserved pieces.
///
/// Unlike the queue it is never refilled automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveStack {
    // Index 0 is the bottom; the last element is the top.
    pieces: ArrayVec<Piece, STACK_CAPACITY>,
}

impl ReserveStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pieces.is_full()
    }

    /// Push on top. A full stack silently drops the piece and returns `false`.
    pub fn push(&mut self, piece: Piece) -> bool {
        self.pieces.try_push(piece).is_ok()
    }

    pub fn pop(&mut self) -> Result<Piece, ActionError> {
        self.pieces.pop().ok_or(ActionError::EmptyStack)
    }

    pub fn peek(&self) -> Option<Piece> {
        self.get(0)
    }

    /// Piece `offset` positions below the top (0 = top).
    pub fn get(&self, offset: usize) -> Option<Piece> {
        let idx = self.top_index(offset)?;
        self.pieces.get(idx).copied()
    }

    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        let idx = self.top_index(offset)?;
        self.pieces.get_mut(idx)
    }

    /// Pieces from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.pieces.iter().rev().copied()
    }

    fn top_index(&self, offset: usize) -> Option<usize> {
        let len = self.pieces.len();
        if offset >= len {
            return None;
        }
        Some(len - 1 - offset)
    }
}
