//! Shared types module - piece values, capacities, and menu commands
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the core containers, the text view, and the input parser alike.
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces, always kept full |
//! | `STACK_CAPACITY` | 3 | Reserved pieces, never auto-refilled |
//! | `MULTI_SWAP_COUNT` | 3 | Pairs exchanged by a multi swap |
//!
//! # Examples
//!
//! ```
//! use piece_stash_types::{MenuCommand, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! let piece = Piece::new(PieceKind::T, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! assert_eq!(PieceKind::L.as_str(), "l");
//! assert_eq!(MenuCommand::from_code(2), Some(MenuCommand::Reserve));
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of slots in the upcoming-piece queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Number of slots in the reserve stack.
pub const STACK_CAPACITY: usize = 3;

/// Number of queue/stack pairs exchanged by [`MenuCommand::SwapThree`].
pub const MULTI_SWAP_COUNT: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_defaults() {
        assert_eq!(QUEUE_CAPACITY, 5);
        assert_eq!(STACK_CAPACITY, 3);
        assert!(MULTI_SWAP_COUNT <= STACK_CAPACITY);
        assert!(MULTI_SWAP_COUNT <= QUEUE_CAPACITY);
    }

    #[test]
    fn piece_display_uses_uppercase_letter() {
        let shown: Vec<String> = PieceKind::ALL
            .iter()
            .map(|k| Piece::new(*k, 0).to_string())
            .collect();
        assert_eq!(shown, vec!["[I 0]", "[O 0]", "[T 0]", "[L 0]"]);
    }

    #[test]
    fn menu_codes_cover_zero_to_five() {
        for code in 0..=5 {
            let cmd = MenuCommand::from_code(code).unwrap();
            assert_eq!(cmd.code(), code);
        }
        assert_eq!(MenuCommand::from_code(6), None);
        assert_eq!(MenuCommand::from_code(-1), None);
    }
}

/// The tetromino shapes handed out by the piece source
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in the order the random picker indexes them.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Number of distinct kinds.
    pub const LEN: usize = Self::ALL.len();

    /// Uppercase letter used on screen.
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }

    /// Lowercase string form (used by the action journal).
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
        }
    }
}

/// One tetromino instance.
///
/// Pieces are small `Copy` values; the queue and the stack hold them by value.
/// The `id` is assigned by the piece source at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

/// Player commands offered by the menu
///
/// Each command has a stable numeric code typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Leave the session loop (code 0)
    Exit,
    /// Play the queue front (code 1)
    Play,
    /// Move the queue front onto the reserve stack (code 2)
    Reserve,
    /// Consume the top of the reserve stack (code 3)
    Use,
    /// Exchange queue front with stack top (code 4)
    SwapOne,
    /// Exchange the first three queue pieces with the three stacked pieces (code 5)
    SwapThree,
}

impl MenuCommand {
    /// Commands in menu order (1..=5, then 0).
    pub const MENU_ORDER: [MenuCommand; 6] = [
        MenuCommand::Play,
        MenuCommand::Reserve,
        MenuCommand::Use,
        MenuCommand::SwapOne,
        MenuCommand::SwapThree,
        MenuCommand::Exit,
    ];

    /// Map a typed option number to a command.
    ///
    /// # Examples
    ///
    /// ```
    /// use piece_stash_types::MenuCommand;
    ///
    /// assert_eq!(MenuCommand::from_code(0), Some(MenuCommand::Exit));
    /// assert_eq!(MenuCommand::from_code(5), Some(MenuCommand::SwapThree));
    /// assert_eq!(MenuCommand::from_code(9), None);
    /// ```
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(MenuCommand::Exit),
            1 => Some(MenuCommand::Play),
            2 => Some(MenuCommand::Reserve),
            3 => Some(MenuCommand::Use),
            4 => Some(MenuCommand::SwapOne),
            5 => Some(MenuCommand::SwapThree),
            _ => None,
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            MenuCommand::Exit => 0,
            MenuCommand::Play => 1,
            MenuCommand::Reserve => 2,
            MenuCommand::Use => 3,
            MenuCommand::SwapOne => 4,
            MenuCommand::SwapThree => 5,
        }
    }

    /// Convert to camelCase string for the action journal
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCommand::Exit => "exit",
            MenuCommand::Play => "play",
            MenuCommand::Reserve => "reserve",
            MenuCommand::Use => "use",
            MenuCommand::SwapOne => "swapOne",
            MenuCommand::SwapThree => "swapThree",
        }
    }

    /// Menu label shown next to the option number.
    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::Exit => "Exit",
            MenuCommand::Play => "Play piece",
            MenuCommand::Reserve => "Reserve piece",
            MenuCommand::Use => "Use reserved piece",
            MenuCommand::SwapOne => "Swap queue front with stack top",
            MenuCommand::SwapThree => "Multi swap (3 pieces)",
        }
    }
}
