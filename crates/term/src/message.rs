//! Status line text for action results.

use crate::core::{ActionError, ActionOutcome, ActionResult};
use crate::types::MenuCommand;

/// Text shown after `command` produced `result`.
pub fn action_message(command: MenuCommand, result: &ActionResult) -> String {
    match result {
        Ok(outcome) => outcome_message(outcome),
        Err(err) => error_message(command, *err).to_string(),
    }
}

pub fn outcome_message(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Played(p) => format!("Played piece {p}"),
        ActionOutcome::Reserved(p) => format!("Piece {p} reserved."),
        ActionOutcome::Used(p) => format!("Used piece {p}"),
        ActionOutcome::Swapped { .. } => "Swapped queue front with stack top.".to_string(),
        ActionOutcome::SwappedThree => "Multi swap done!".to_string(),
    }
}

pub fn error_message(command: MenuCommand, err: ActionError) -> &'static str {
    match err {
        ActionError::EmptyQueue => "Queue is empty!",
        ActionError::FullStack => "Stack is full!",
        ActionError::EmptyStack => "Stack is empty!",
        ActionError::SwapImpossible if command == MenuCommand::SwapThree => {
            "Multi swap impossible!"
        }
        ActionError::SwapImpossible => "Swap impossible!",
    }
}

pub const INVALID_OPTION: &str = "Invalid option!";

pub const EXITING: &str = "Exiting...";
