use log::info;
use thiserror::Error;

use crate::game_state::error::GameStateError;
use crate::game_state::outcome::Outcome;
use crate::game_state::{GameState, MoveList};
use crate::input_handler::PlayerInput;
use crate::search::{self, Pruning, Score, SearchContext, SearchError, SearchStats};

/// Core engine state and configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub starting_position: GameState,
    pub pruning: Pruning,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_position: GameState::default(),
            pruning: Pruning::default(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("The game is over: {outcome}")]
    GameOver { outcome: Outcome },
    #[error("Game state error: {error}")]
    GameStateError { error: GameStateError },
    #[error("Search error: {error}")]
    SearchError { error: SearchError },
}

/// Owns the game in progress and the search used to play it. This is the
/// surface the interactive loop and the CLI talk to.
pub struct Engine {
    starting_position: GameState,
    state: GameState,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: config.starting_position.clone(),
            starting_position: config.starting_position,
            search_context: SearchContext::new(config.pruning),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn check_game_over(&self) -> Option<Outcome> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            Some(outcome)
        } else {
            None
        }
    }

    pub fn legal_moves(&self) -> MoveList {
        self.state.legal_moves()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.state.last_move()
    }

    pub fn make_move(&mut self, index: usize) -> Result<usize, EngineError> {
        self.ensure_active()?;
        let player = self.state.turn();
        self.state
            .play(index)
            .map_err(|error| EngineError::GameStateError { error })?;
        info!("{} played {}", player, index);
        Ok(index)
    }

    pub fn undo_move(&mut self) -> Result<usize, EngineError> {
        let index = self
            .state
            .undo()
            .map_err(|error| EngineError::GameStateError { error })?;
        info!("undid move {}", index);
        Ok(index)
    }

    /// Returns to the configured starting position.
    pub fn reset(&mut self) {
        self.state = self.starting_position.clone();
        info!("reset to {}", self.state.to_position_string());
    }

    pub fn get_best_move(&mut self) -> Result<usize, EngineError> {
        self.ensure_active()?;
        search::select_move(&mut self.search_context, &mut self.state)
            .map_err(|error| EngineError::SearchError { error })
    }

    pub fn make_best_move(&mut self) -> Result<usize, EngineError> {
        let best_move = self.get_best_move()?;
        info!(
            "engine chose {} after searching {} nodes",
            best_move,
            self.search_context.searched_node_count()
        );
        self.make_move(best_move)
    }

    /// Game-theoretic value of the current position.
    pub fn evaluate(&mut self) -> Result<Score, EngineError> {
        search::evaluate(&mut self.search_context, &mut self.state)
            .map_err(|error| EngineError::SearchError { error })
    }

    pub fn get_search_stats(&self) -> SearchStats {
        self.search_context.stats().clone()
    }

    pub fn pruning(&self) -> Pruning {
        self.search_context.pruning()
    }

    /// Carries out a command typed at the prompt. `Exit` is left to the caller.
    pub fn apply_input(&mut self, input: PlayerInput) -> Result<(), EngineError> {
        match input {
            PlayerInput::Move { index } => self.make_move(index).map(|_| ()),
            PlayerInput::UseEngine => self.make_best_move().map(|_| ()),
            PlayerInput::Undo => self.undo_move().map(|_| ()),
            PlayerInput::Reset => {
                self.reset();
                Ok(())
            }
            PlayerInput::Exit => Ok(()),
        }
    }

    fn ensure_active(&self) -> Result<(), EngineError> {
        match self.check_game_over() {
            Some(outcome) => Err(EngineError::GameOver { outcome }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::player::Player;
    use crate::search::{DRAW, WIN_X};
    use crate::tictactoe_position;

    fn engine_at(starting_position: GameState) -> Engine {
        Engine::with_config(EngineConfig {
            starting_position,
            pruning: Pruning::default(),
        })
    }

    #[test]
    fn test_make_move_and_undo() {
        let mut engine = Engine::new();
        assert_eq!(engine.make_move(4), Ok(4));
        assert_eq!(engine.state().turn(), Player::O);
        assert_eq!(engine.last_move(), Some(4));
        assert_eq!(engine.undo_move(), Ok(4));
        assert_eq!(engine.state(), &GameState::empty());
    }

    #[test]
    fn test_make_move_rejects_occupied_cell() {
        let mut engine = Engine::new();
        engine.make_move(0).unwrap();
        assert_eq!(
            engine.make_move(0),
            Err(EngineError::GameStateError {
                error: GameStateError::InvalidMove { index: 0 }
            })
        );
    }

    #[test]
    fn test_undo_without_history() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.undo_move(),
            Err(EngineError::GameStateError {
                error: GameStateError::EmptyHistory
            })
        );
    }

    #[test]
    fn test_make_best_move_wins() {
        let mut engine = engine_at(tictactoe_position! {
            x . o
            . x o
            . . .
        });
        assert_eq!(engine.make_best_move(), Ok(8));
        assert_eq!(engine.check_game_over(), Some(Outcome::Win(Player::X)));
        assert_eq!(engine.get_search_stats().last_value, Some(WIN_X));
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut engine = engine_at(tictactoe_position! {
            o o o
            x x .
            x . .
        });
        let game_over = Err(EngineError::GameOver {
            outcome: Outcome::Win(Player::O),
        });
        assert_eq!(engine.make_move(5), game_over);
        assert_eq!(engine.make_best_move(), game_over);
    }

    #[test]
    fn test_undo_after_game_over_reopens_game() {
        let mut engine = Engine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.make_move(index).unwrap();
        }
        assert_eq!(engine.check_game_over(), Some(Outcome::Win(Player::X)));
        engine.undo_move().unwrap();
        assert_eq!(engine.check_game_over(), None);
    }

    #[test]
    fn test_reset_returns_to_starting_position() {
        let start = tictactoe_position! {
            x . .
            . . .
            . . .
        };
        let mut engine = engine_at(start.clone());
        engine.make_move(4).unwrap();
        engine.make_best_move().unwrap();
        engine.reset();
        assert_eq!(engine.state(), &start);
    }

    #[test]
    fn test_self_play_ends_in_draw() {
        let mut engine = Engine::new();
        while engine.check_game_over().is_none() {
            engine.make_best_move().unwrap();
        }
        assert_eq!(engine.outcome(), Outcome::Draw);
        assert_eq!(engine.state().history().len(), 9);
    }

    #[test]
    fn test_evaluate() {
        let mut engine = Engine::new();
        assert_eq!(engine.evaluate(), Ok(DRAW));
        assert_eq!(engine.get_search_stats().nodes, 94_978);
    }

    #[test]
    fn test_apply_input() {
        let mut engine = Engine::new();
        engine.apply_input(PlayerInput::Move { index: 4 }).unwrap();
        engine.apply_input(PlayerInput::UseEngine).unwrap();
        assert_eq!(engine.state().history().len(), 2);
        engine.apply_input(PlayerInput::Undo).unwrap();
        assert_eq!(engine.state().history(), &[4]);
        engine.apply_input(PlayerInput::Reset).unwrap();
        assert_eq!(engine.state(), &GameState::empty());
        engine.apply_input(PlayerInput::Exit).unwrap();
    }
}
