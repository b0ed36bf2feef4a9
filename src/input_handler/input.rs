//! Player input parsing.

use std::io::BufRead;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::notation::cell_from_notation;

static CELL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([abcABC][1-3])$").expect("CELL_RE regex should be valid"));

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

/// A single line typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Play on a cell, e.g. "b2".
    Move { index: usize },
    /// Let the engine choose the move (an empty line).
    UseEngine,
    /// Take back the last move ("-").
    Undo,
    /// Start over from the starting position ("r").
    Reset,
    /// Leave the game ("exit").
    Exit,
}

impl FromStr for PlayerInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        match trimmed {
            "" => return Ok(PlayerInput::UseEngine),
            "-" => return Ok(PlayerInput::Undo),
            "r" => return Ok(PlayerInput::Reset),
            "exit" | "quit" | "q" => return Ok(PlayerInput::Exit),
            _ => (),
        };

        if let Some(caps) = CELL_RE.captures(trimmed) {
            if let Some(index) = cell_from_notation(&caps[1]) {
                return Ok(PlayerInput::Move { index });
            }
        }

        Err(InputError::InvalidInput {
            input: trimmed.to_string(),
        })
    }
}

/// Reads one line from `reader` and parses it. End of input reads as `Exit`.
pub fn parse_player_input<R: BufRead>(reader: &mut R) -> Result<PlayerInput, InputError> {
    let mut input = String::new();
    let bytes = reader
        .read_line(&mut input)
        .map_err(|e| InputError::IOError {
            error: format!("Failed to read line: {}", e),
        })?;

    if bytes == 0 {
        return Ok(PlayerInput::Exit);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_moves() {
        assert_eq!("a1".parse(), Ok(PlayerInput::Move { index: 0 }));
        assert_eq!("b3".parse(), Ok(PlayerInput::Move { index: 5 }));
        assert_eq!(" C2 \n".parse(), Ok(PlayerInput::Move { index: 7 }));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("\n".parse(), Ok(PlayerInput::UseEngine));
        assert_eq!("-".parse(), Ok(PlayerInput::Undo));
        assert_eq!("r".parse(), Ok(PlayerInput::Reset));
        assert_eq!("exit".parse(), Ok(PlayerInput::Exit));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "d4".parse::<PlayerInput>(),
            Err(InputError::InvalidInput {
                input: "d4".to_string()
            })
        );
        assert!("a1a2".parse::<PlayerInput>().is_err());
    }

    #[test]
    fn test_parse_player_input_reads_lines() {
        let mut reader = Cursor::new("b2\n\n-\n");
        assert_eq!(
            parse_player_input(&mut reader),
            Ok(PlayerInput::Move { index: 4 })
        );
        assert_eq!(parse_player_input(&mut reader), Ok(PlayerInput::UseEngine));
        assert_eq!(parse_player_input(&mut reader), Ok(PlayerInput::Undo));
        assert_eq!(parse_player_input(&mut reader), Ok(PlayerInput::Exit));
    }
}
