use std::fmt;

use super::cell::Cell;
use super::player::Player;
use super::CELL_COUNT;

/// The 8 index triples that complete a game: rows, columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Status of a position, derived purely from its cells.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum Outcome {
    Active,
    Draw,
    Win(Player),
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Active)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Active => write!(f, "in progress"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Win(player) => write!(f, "{} wins", player),
        }
    }
}

/// Returns the player holding a completed line, if any.
pub fn winner(cells: &[Cell; CELL_COUNT]) -> Option<Player> {
    WIN_LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(player) if cells[a] == cells[b] && cells[b] == cells[c] => Some(player),
        _ => None,
    })
}

/// Classifies a position. Win lines are scanned before the board is checked for
/// fullness, so a full board with a completed line is a win, never a draw.
pub fn outcome(cells: &[Cell; CELL_COUNT]) -> Outcome {
    if let Some(player) = winner(cells) {
        return Outcome::Win(player);
    }

    if cells.iter().all(|cell| !cell.is_empty()) {
        Outcome::Draw
    } else {
        Outcome::Active
    }
}
