//! Common types re-exported for convenience.

pub use crate::game::engine::{Engine, EngineConfig, EngineError};
pub use crate::game_state::cell::Cell;
pub use crate::game_state::error::GameStateError;
pub use crate::game_state::outcome::Outcome;
pub use crate::game_state::player::Player;
pub use crate::game_state::GameState;
pub use crate::search::{minimax_value, select_move, Pruning, Score, SearchContext, SearchError};
