//! Ring buffer of upcoming pieces.
//!
//! The queue has exactly [`QUEUE_CAPACITY`] slots. Insertion happens at the
//! logical tail and removal at the logical head; the index wraparound never
//! leaves this module.

use crate::outcome::ActionError;
use crate::source::PieceSource;
use crate::types::{Piece, QUEUE_CAPACITY};

/// Fixed-capacity circular queue of pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    head: usize,
    len: usize,
}

impl PieceQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    /// Create a queue and fill every slot from `source`.
    pub fn filled(source: &mut PieceSource) -> Self {
        let mut queue = Self::new();
        queue.initialize(source);
        queue
    }

    /// Reset to empty, then fill all slots with freshly generated pieces in order.
    pub fn initialize(&mut self, source: &mut PieceSource) {
        *self = Self::new();
        for _ in 0..QUEUE_CAPACITY {
            self.enqueue(source.generate());
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Append at the tail.
    ///
    /// A full queue silently drops the piece and returns `false`.
    pub fn enqueue(&mut self, piece: Piece) -> bool {
        if self.is_full() {
            return false;
        }
        let tail = self.slot_index(self.len);
        self.slots[tail] = Some(piece);
        self.len += 1;
        true
    }

    /// Remove and return the front piece.
    pub fn dequeue(&mut self) -> Result<Piece, ActionError> {
        if self.is_empty() {
            return Err(ActionError::EmptyQueue);
        }
        let piece = self.slots[self.head].take().ok_or(ActionError::EmptyQueue)?;
        self.head = (self.head + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// Next piece to be played.
    pub fn front(&self) -> Option<Piece> {
        self.get(0)
    }

    /// Piece `offset` positions behind the front (0 = front).
    pub fn get(&self, offset: usize) -> Option<Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[self.slot_index(offset)]
    }

    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        if offset >= self.len {
            return None;
        }
        let idx = self.slot_index(offset);
        self.slots[idx].as_mut()
    }

    /// Active pieces, front to back.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).filter_map(move |offset| self.get(offset))
    }

    #[inline(always)]
    fn slot_index(&self, offset: usize) -> usize {
        (self.head + offset) % QUEUE_CAPACITY
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
