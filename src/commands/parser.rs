//! Splitting raw input lines into a command and its arguments.

/// A line of user input broken into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedInput {
    /// First token, lower-cased. Empty when the line had no tokens.
    pub command: String,
    /// Remaining tokens, case preserved.
    pub args: Vec<String>,
}

impl ParsedInput {
    /// Arguments as string slices, the form handlers take.
    pub fn arg_slices(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Split a line on whitespace into a command token and positional arguments.
///
/// There is no quoting, so arguments never contain whitespace.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();
    let command = tokens
        .next()
        .map(|t| t.trim().to_lowercase())
        .unwrap_or_default();
    let args = tokens.map(str::to_string).collect();

    ParsedInput { command, args }
}

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Delete,
    Find,
    Phone,
    All,
    Exit,
}

impl Command {
    /// Map a lower-cased command token to a command.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "hello" => Some(Self::Hello),
            "add" => Some(Self::Add),
            "change" => Some(Self::Change),
            "delete" => Some(Self::Delete),
            "find" => Some(Self::Find),
            "phone" => Some(Self::Phone),
            "all" => Some(Self::All),
            "exit" | "close" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Canonical token, used in logs and error context.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Delete => "delete",
            Self::Find => "find",
            Self::Phone => "phone",
            Self::All => "all",
            Self::Exit => "exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_and_args() {
        let parsed = parse_input("ADD Alice 1234567890");
        assert_eq!(parsed.command, "add");
        assert_eq!(parsed.args, vec!["Alice", "1234567890"]);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let parsed = parse_input("  change\tbob   1111111111  2222222222 \n");
        assert_eq!(parsed.command, "change");
        assert_eq!(parsed.arg_slices(), vec!["bob", "1111111111", "2222222222"]);
    }

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_input(""), ParsedInput::default());
        assert_eq!(parse_input("   \t "), ParsedInput::default());
    }

    #[test]
    fn test_command_from_token() {
        assert_eq!(Command::from_token("add"), Some(Command::Add));
        assert_eq!(Command::from_token("close"), Some(Command::Exit));
        assert_eq!(Command::from_token("exit"), Some(Command::Exit));
        assert_eq!(Command::from_token("remove"), None);
        assert_eq!(Command::from_token(""), None);
        // Tokens are lower-cased by the parser, not here
        assert_eq!(Command::from_token("ADD"), None);
    }
}
