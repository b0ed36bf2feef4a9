use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameStateError {
    #[error("Cannot play on cell {index}, it is out of range or already occupied")]
    InvalidMove { index: usize },
    #[error("Cannot undo, no moves have been played")]
    EmptyHistory,
}
