//! Console command parsing
//!
//! Turns a line typed at the prompt into a `ConsoleCommand`.

/// A command entered at the console prompt.
///
/// Each variant has a long and a short spelling; anything else parses
/// as `Unknown`.
#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Register,
    Login,
    Help,
    Quit,
    Empty,
    Unknown,
}

/// Parses a raw prompt line into the `ConsoleCommand` enum.
pub fn parse_command(raw: &str) -> ConsoleCommand {
    match raw.trim().to_ascii_lowercase().as_str() {
        "register" | "r" => ConsoleCommand::Register,
        "login" | "l" => ConsoleCommand::Login,
        "help" | "h" | "?" => ConsoleCommand::Help,
        "quit" | "q" | "exit" => ConsoleCommand::Quit,
        "" => ConsoleCommand::Empty,
        _ => ConsoleCommand::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_and_short_spellings() {
        assert_eq!(parse_command("register"), ConsoleCommand::Register);
        assert_eq!(parse_command("r"), ConsoleCommand::Register);
        assert_eq!(parse_command("login"), ConsoleCommand::Login);
        assert_eq!(parse_command("l"), ConsoleCommand::Login);
        assert_eq!(parse_command("help"), ConsoleCommand::Help);
        assert_eq!(parse_command("?"), ConsoleCommand::Help);
        assert_eq!(parse_command("quit"), ConsoleCommand::Quit);
        assert_eq!(parse_command("exit"), ConsoleCommand::Quit);
    }

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        assert_eq!(parse_command("  REGISTER \n"), ConsoleCommand::Register);
        assert_eq!(parse_command("Quit\r\n"), ConsoleCommand::Quit);
    }

    #[test]
    fn test_blank_line_is_empty() {
        assert_eq!(parse_command(""), ConsoleCommand::Empty);
        assert_eq!(parse_command("   \n"), ConsoleCommand::Empty);
    }

    #[test]
    fn test_anything_else_is_unknown() {
        assert_eq!(parse_command("frobnicate"), ConsoleCommand::Unknown);
        assert_eq!(parse_command("register now"), ConsoleCommand::Unknown);
    }
}
