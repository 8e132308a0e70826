//! Results of player actions.

use crate::types::Piece;

/// Why an action was rejected.
///
/// Every variant is recoverable: the session is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("the piece queue is empty")]
    EmptyQueue,
    #[error("the reserve stack is full")]
    FullStack,
    #[error("the reserve stack is empty")]
    EmptyStack,
    #[error("not enough pieces to swap")]
    SwapImpossible,
}

impl ActionError {
    /// Stable identifier for the action journal.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionError::EmptyQueue => "emptyQueue",
            ActionError::FullStack => "fullStack",
            ActionError::EmptyStack => "emptyStack",
            ActionError::SwapImpossible => "swapImpossible",
        }
    }
}

/// What a successful action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The former queue front was played.
    Played(Piece),
    /// The former queue front now sits on top of the stack.
    Reserved(Piece),
    /// The former stack top was consumed.
    Used(Piece),
    /// Queue front and stack top traded places; fields hold the pieces after the swap.
    Swapped { queue_front: Piece, stack_top: Piece },
    /// Three queue/stack pairs traded places.
    SwappedThree,
}

pub type ActionResult = Result<ActionOutcome, ActionError>;
