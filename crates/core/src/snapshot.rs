use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Copy of everything a view or journal needs to show a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    /// Reserved pieces, top first.
    pub stack: ArrayVec<Piece, STACK_CAPACITY>,
    /// Upcoming pieces, front first.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Id the next generated piece will carry.
    pub next_id: u32,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.stack.clear();
        self.queue.clear();
        self.next_id = 0;
    }

    /// Unfilled stack slots (drawn as blanks above the stacked pieces).
    pub fn free_stack_slots(&self) -> usize {
        STACK_CAPACITY - self.stack.len()
    }
}
