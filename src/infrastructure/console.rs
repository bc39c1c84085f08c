use crate::domain::coordinate::Square;
use crate::domain::services::{Command, CommandSource};
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    InvalidNumber(String),
    OutOfBounds(usize),
    MissingColumn,
    UnknownCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty input"),
            ParseError::InvalidNumber(s) => write!(f, "invalid number '{}'", s),
            ParseError::OutOfBounds(n) => write!(f, "{} is off the board (0-7)", n),
            ParseError::MissingColumn => write!(f, "please provide a row and a column"),
            ParseError::UnknownCommand(s) => write!(f, "unknown command '{}'", s),
        }
    }
}

impl std::error::Error for ParseError {}

fn parse_index(input: &str) -> Result<usize, ParseError> {
    let value = input
        .trim()
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidNumber(input.to_string()))?;
    if value >= 8 {
        return Err(ParseError::OutOfBounds(value));
    }
    Ok(value)
}

/// Parses one input line: `<row> <col>` presses a square, single letters
/// navigate (`b`ack, `f`orward, `n`ew, `c`lear, `j`son, `h`elp, `q`uit).
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return Err(ParseError::Empty);
    };

    match first.to_ascii_lowercase().as_str() {
        "b" | "back" => return Ok(Command::Back),
        "f" | "forward" => return Ok(Command::Forward),
        "n" | "new" => return Ok(Command::Restart),
        "c" | "clear" => return Ok(Command::Clear),
        "j" | "json" => return Ok(Command::Snapshot),
        "h" | "help" | "?" => return Ok(Command::Help),
        "q" | "quit" => return Ok(Command::Quit),
        _ => {}
    }

    if !first.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::UnknownCommand(first.to_string()));
    }
    let row = parse_index(first)?;
    let col = parse_index(parts.get(1).ok_or(ParseError::MissingColumn)?)?;
    Ok(Command::Press(Square::new(row, col)))
}

/// Reads commands from stdin, re-prompting on bad input.
pub struct HumanConsoleInput;

impl HumanConsoleInput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandSource for HumanConsoleInput {
    fn next_command(&mut self) -> Option<Command> {
        let stdin = io::stdin();
        loop {
            print!("> ");
            if io::stdout().flush().is_err() {
                return None;
            }

            let mut input = String::new();
            match stdin.lock().read_line(&mut input) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }

            match parse_command(&input) {
                Ok(command) => return Some(command),
                Err(ParseError::Empty) => continue,
                Err(e) => println!("{}", e),
            }
        }
    }
}

/// Feeds a fixed list of input lines, skipping ones that do not parse.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl CommandSource for ScriptedInput {
    fn next_command(&mut self) -> Option<Command> {
        while let Some(line) = self.lines.pop_front() {
            if let Ok(command) = parse_command(&line) {
                return Some(command);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        assert_eq!(parse_command("6 4"), Ok(Command::Press(Square::new(6, 4))));
        assert_eq!(parse_command("  0   7 \n"), Ok(Command::Press(Square::new(0, 7))));
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_command("b"), Ok(Command::Back));
        assert_eq!(parse_command("Forward"), Ok(Command::Forward));
        assert_eq!(parse_command("n"), Ok(Command::Restart));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command(""), Err(ParseError::Empty));
        assert_eq!(parse_command("6"), Err(ParseError::MissingColumn));
        assert_eq!(parse_command("8 1"), Err(ParseError::OutOfBounds(8)));
        assert_eq!(
            parse_command("3 x"),
            Err(ParseError::InvalidNumber("x".to_string()))
        );
        assert_eq!(
            parse_command("castle"),
            Err(ParseError::UnknownCommand("castle".to_string()))
        );
    }

    #[test]
    fn test_scripted_input_skips_garbage() {
        let mut input = ScriptedInput::new(["nonsense", "6 4", "", "q"]);
        assert_eq!(input.next_command(), Some(Command::Press(Square::new(6, 4))));
        assert_eq!(input.next_command(), Some(Command::Quit));
        assert_eq!(input.next_command(), None);
    }
}
