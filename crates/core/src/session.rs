//! Game session module - the five player actions
//!
//! A [`GameSession`] owns the piece queue, the reserve stack, and the piece
//! source that refills the queue. Each action validates its preconditions before
//! touching any state, so a rejected action leaves the session unchanged (the id
//! counter included).

use arrayvec::ArrayVec;

use crate::outcome::{ActionError, ActionOutcome, ActionResult};
use crate::queue::PieceQueue;
use crate::snapshot::SessionSnapshot;
use crate::source::PieceSource;
use crate::stack::ReserveStack;
use crate::types::{MenuCommand, Piece, MULTI_SWAP_COUNT};

/// Queue, stack, and source for one run of the game.
#[derive(Debug)]
pub struct GameSession {
    source: PieceSource,
    queue: PieceQueue,
    stack: ReserveStack,
}

impl GameSession {
    /// Start a session with a full queue drawn from `source` and an empty stack.
    pub fn new(mut source: PieceSource) -> Self {
        let queue = PieceQueue::filled(&mut source);
        Self {
            source,
            queue,
            stack: ReserveStack::new(),
        }
    }

    /// Session seeded with the default LCG picker.
    pub fn with_seed(seed: u32) -> Self {
        Self::new(PieceSource::with_seed(seed))
    }

    /// Assemble a session from explicit parts (no refill is performed).
    pub fn from_parts(source: PieceSource, queue: PieceQueue, stack: ReserveStack) -> Self {
        Self {
            source,
            queue,
            stack,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    pub fn source(&self) -> &PieceSource {
        &self.source
    }

    pub fn queue_mut(&mut self) -> &mut PieceQueue {
        &mut self.queue
    }

    pub fn stack_mut(&mut self) -> &mut ReserveStack {
        &mut self.stack
    }

    /// Play the queue front and refill the queue with one new piece.
    pub fn play(&mut self) -> ActionResult {
        let played = self.queue.dequeue()?;
        self.refill();
        Ok(ActionOutcome::Played(played))
    }

    /// Move the queue front onto the stack and refill the queue.
    ///
    /// An empty queue is reported before a full stack.
    pub fn reserve(&mut self) -> ActionResult {
        if self.queue.is_empty() {
            return Err(ActionError::EmptyQueue);
        }
        if self.stack.is_full() {
            return Err(ActionError::FullStack);
        }

        let reserved = self.queue.dequeue()?;
        self.stack.push(reserved);
        self.refill();
        Ok(ActionOutcome::Reserved(reserved))
    }

    /// Consume the top of the stack. Nothing is refilled.
    pub fn use_piece(&mut self) -> ActionResult {
        let used = self.stack.pop()?;
        Ok(ActionOutcome::Used(used))
    }

    /// Exchange the queue front with the stack top in place.
    pub fn swap_one(&mut self) -> ActionResult {
        let (Some(front), Some(top)) = (self.queue.get_mut(0), self.stack.get_mut(0)) else {
            return Err(ActionError::SwapImpossible);
        };
        std::mem::swap(front, top);
        Ok(ActionOutcome::Swapped {
            queue_front: *front,
            stack_top: *top,
        })
    }

    /// Exchange the first three queue pieces with the three stacked pieces.
    ///
    /// Pairs are front/top, front+1/top-1, front+2/top-2. Either all pairs are
    /// exchanged or none.
    pub fn swap_three(&mut self) -> ActionResult {
        // Read every pair before writing any, so a short side changes nothing.
        let pairs: Option<ArrayVec<(Piece, Piece), MULTI_SWAP_COUNT>> = (0..MULTI_SWAP_COUNT)
            .map(|offset| Some((self.queue.get(offset)?, self.stack.get(offset)?)))
            .collect();
        let Some(pairs) = pairs else {
            return Err(ActionError::SwapImpossible);
        };

        for (offset, (queued, reserved)) in pairs.into_iter().enumerate() {
            match (self.queue.get_mut(offset), self.stack.get_mut(offset)) {
                (Some(q), Some(s)) => {
                    *q = reserved;
                    *s = queued;
                }
                _ => debug_assert!(false, "swap slot {} disappeared after the read", offset),
            }
        }
        Ok(ActionOutcome::SwappedThree)
    }

    /// Dispatch one menu command.
    ///
    /// Returns `None` for [`MenuCommand::Exit`], which is not a session action.
    pub fn apply(&mut self, command: MenuCommand) -> Option<ActionResult> {
        let result = match command {
            MenuCommand::Exit => return None,
            MenuCommand::Play => self.play(),
            MenuCommand::Reserve => self.reserve(),
            MenuCommand::Use => self.use_piece(),
            MenuCommand::SwapOne => self.swap_one(),
            MenuCommand::SwapThree => self.swap_three(),
        };
        Some(result)
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();
        out.stack.extend(self.stack.iter());
        out.queue.extend(self.queue.iter());
        out.next_id = self.source.next_id();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn refill(&mut self) {
        let piece = self.source.generate();
        self.queue.enqueue(piece);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
