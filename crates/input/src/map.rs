//! Mapping from typed lines to menu commands.

use crate::types::MenuCommand;

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    /// A recognised option number.
    Command(MenuCommand),
    /// An integer that is not on the menu.
    Unknown(i64),
    /// Anything that does not start with an integer; discarded.
    NotANumber,
}

/// Parse one line of input.
///
/// Only the first whitespace-separated token is read; the rest of the line is
/// discarded, so `"2 please"` selects option 2.
pub fn parse_line(line: &str) -> MenuInput {
    let Some(token) = line.split_whitespace().next() else {
        return MenuInput::NotANumber;
    };

    match token.parse::<i64>() {
        Ok(code) => match MenuCommand::from_code(code) {
            Some(cmd) => MenuInput::Command(cmd),
            None => MenuInput::Unknown(code),
        },
        Err(_) => MenuInput::NotANumber,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_numbers() {
        assert_eq!(parse_line("0"), MenuInput::Command(MenuCommand::Exit));
        assert_eq!(parse_line("1\n"), MenuInput::Command(MenuCommand::Play));
        assert_eq!(parse_line("  2 "), MenuInput::Command(MenuCommand::Reserve));
        assert_eq!(parse_line("3"), MenuInput::Command(MenuCommand::Use));
        assert_eq!(parse_line("4"), MenuInput::Command(MenuCommand::SwapOne));
        assert_eq!(parse_line("5"), MenuInput::Command(MenuCommand::SwapThree));
        assert_eq!(parse_line("+1"), MenuInput::Command(MenuCommand::Play));
    }

    #[test]
    fn test_unknown_numbers() {
        assert_eq!(parse_line("6"), MenuInput::Unknown(6));
        assert_eq!(parse_line("-1"), MenuInput::Unknown(-1));
        assert_eq!(parse_line("42 extra"), MenuInput::Unknown(42));
    }

    #[test]
    fn test_non_numbers() {
        assert_eq!(parse_line(""), MenuInput::NotANumber);
        assert_eq!(parse_line("   \n"), MenuInput::NotANumber);
        assert_eq!(parse_line("play"), MenuInput::NotANumber);
        assert_eq!(parse_line("1.5"), MenuInput::NotANumber);
        assert_eq!(parse_line("99999999999999999999"), MenuInput::NotANumber);
    }

    #[test]
    fn test_trailing_tokens_are_discarded() {
        assert_eq!(
            parse_line("2 please"),
            MenuInput::Command(MenuCommand::Reserve)
        );
    }
}
