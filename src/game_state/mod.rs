pub mod cell;
pub mod error;
pub mod outcome;
pub mod player;

mod display;
mod fen;


use cell::Cell;
use error::GameStateError;
use log::trace;
use outcome::Outcome;
use player::Player;
use smallvec::SmallVec;

pub use fen::{ParsePositionError, EMPTY_POSITION};

/// Number of cells on the board, addressed 0..9 in row-major order.
pub const CELL_COUNT: usize = 9;

/// Legal move indices, ascending. Never longer than the board.
pub type MoveList = SmallVec<[usize; CELL_COUNT]>;

/// A tic-tac-toe position together with the side to move and the moves played
/// since it was constructed. Search mutates it in place with `play`/`undo`
/// pairs, so every `play` made during a search is retracted before returning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    cells: [Cell; CELL_COUNT],
    turn: Player,
    history: Vec<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            turn: Player::X,
            history: Vec::with_capacity(CELL_COUNT),
        }
    }
}

impl GameState {
    /// Builds a state from an initial position. Without an explicit turn, `X`
    /// moves when both players have the same number of markers and `O`
    /// otherwise. The position itself is not validated.
    pub fn new(cells: [Cell; CELL_COUNT], turn: Option<Player>) -> Self {
        let turn = turn.unwrap_or_else(|| Self::derive_turn(&cells));
        Self {
            cells,
            turn,
            history: Vec::with_capacity(CELL_COUNT),
        }
    }

    pub fn empty() -> Self {
        Default::default()
    }

    fn derive_turn(cells: &[Cell; CELL_COUNT]) -> Player {
        let count = |player| {
            cells
                .iter()
                .filter(|cell| **cell == Cell::Occupied(player))
                .count()
        };
        if count(Player::X) == count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn last_move(&self) -> Option<usize> {
        self.history.last().copied()
    }

    pub fn outcome(&self) -> Outcome {
        outcome::outcome(&self.cells)
    }

    pub fn is_legal(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Cell::Empty))
    }

    /// Empty cell indices in ascending order; empty once the board is full.
    pub fn legal_moves(&self) -> MoveList {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Places the current player's marker on `index` and passes the turn.
    pub fn play(&mut self, index: usize) -> Result<(), GameStateError> {
        if !self.is_legal(index) {
            return Err(GameStateError::InvalidMove { index });
        }

        self.cells[index] = Cell::Occupied(self.turn);
        self.turn = self.turn.opposite();
        self.history.push(index);
        trace!("played {}, {} to move", index, self.turn);
        Ok(())
    }

    /// Retracts the most recent `play`, returning the cell it occupied.
    pub fn undo(&mut self) -> Result<usize, GameStateError> {
        let index = self.history.pop().ok_or(GameStateError::EmptyHistory)?;
        self.cells[index] = Cell::Empty;
        self.turn = self.turn.opposite();
        trace!("undid {}, {} to move", index, self.turn);
        Ok(index)
    }

    /// Clears the board and history and gives `X` the move.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
        self.history.clear();
        self.turn = Player::X;
    }

    /// The same position with every marker and the side to move exchanged.
    /// History is not carried over.
    pub fn with_players_swapped(&self) -> Self {
        let mut cells = self.cells;
        for cell in cells.iter_mut() {
            *cell = cell.flipped();
        }
        Self::new(cells, Some(self.turn.opposite()))
    }
}
