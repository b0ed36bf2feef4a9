//! Compact text notation for positions: nine cells in row-major order using
//! `x`, `o` and `.` (or `-`), optionally followed by whitespace and the side
//! to move, e.g. `"x.o.x.... o"`.

use std::str::FromStr;

use thiserror::Error;

use super::cell::Cell;
use super::player::Player;
use super::{GameState, CELL_COUNT};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParsePositionError {
    #[error("Wrong number of fields")]
    WrongNumberOfFields,
    #[error("Wrong number of cells: 9 expected, {cell_count:?} given")]
    InvalidCellCount { cell_count: usize },
    #[error("Invalid cell character: {invalid_character:?}")]
    InvalidCellCharacter { invalid_character: char },
    #[error("Invalid player: {invalid_player:?}")]
    InvalidPlayer { invalid_player: String },
}

type ParseResult<T> = Result<T, ParsePositionError>;

pub const EMPTY_POSITION: &str = ".........";

fn parse_cells(field: &str) -> ParseResult<[Cell; CELL_COUNT]> {
    let cell_count = field.chars().count();
    if cell_count != CELL_COUNT {
        return Err(ParsePositionError::InvalidCellCount { cell_count });
    }

    let mut cells = [Cell::Empty; CELL_COUNT];
    for (slot, c) in cells.iter_mut().zip(field.chars()) {
        *slot = Cell::from_char(c)
            .ok_or(ParsePositionError::InvalidCellCharacter { invalid_character: c })?;
    }
    Ok(cells)
}

fn parse_turn(field: &str) -> ParseResult<Player> {
    match field {
        "x" | "X" => Ok(Player::X),
        "o" | "O" => Ok(Player::O),
        _ => Err(ParsePositionError::InvalidPlayer {
            invalid_player: field.to_string(),
        }),
    }
}

impl FromStr for GameState {
    type Err = ParsePositionError;

    fn from_str(position: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = position.split_whitespace().collect();
        match fields.as_slice() {
            [cells] => Ok(GameState::new(parse_cells(cells)?, None)),
            [cells, turn] => Ok(GameState::new(parse_cells(cells)?, Some(parse_turn(turn)?))),
            _ => Err(ParsePositionError::WrongNumberOfFields),
        }
    }
}

impl GameState {
    /// Serializes the cells and side to move in the notation `from_str` accepts.
    pub fn to_position_string(&self) -> String {
        let mut position: String = self.cells.iter().map(Cell::to_char).collect();
        position.push(' ');
        position.push(self.turn.to_char());
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_position() {
        let state: GameState = EMPTY_POSITION.parse().unwrap();
        assert_eq!(state, GameState::empty());
    }

    #[test]
    fn test_parse_derives_turn() {
        let state: GameState = "x........".parse().unwrap();
        assert_eq!(state.turn(), Player::O);
        assert_eq!(state.get(0), Some(Cell::Occupied(Player::X)));
    }

    #[test]
    fn test_parse_explicit_turn() {
        let state: GameState = "x-------- x".parse().unwrap();
        assert_eq!(state.turn(), Player::X);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x.o".parse::<GameState>(),
            Err(ParsePositionError::InvalidCellCount { cell_count: 3 })
        );
        assert_eq!(
            "x...q....".parse::<GameState>(),
            Err(ParsePositionError::InvalidCellCharacter {
                invalid_character: 'q'
            })
        );
        assert_eq!(
            "......... z".parse::<GameState>(),
            Err(ParsePositionError::InvalidPlayer {
                invalid_player: "z".to_string()
            })
        );
        assert_eq!(
            "......... x x".parse::<GameState>(),
            Err(ParsePositionError::WrongNumberOfFields)
        );
    }

    #[test]
    fn test_to_position_string() {
        let state: GameState = "xo..x....".parse().unwrap();
        assert_eq!(state.to_position_string(), "xo..x.... o");
        assert_eq!(
            state.to_position_string().parse::<GameState>().unwrap(),
            state
        );
    }
}
