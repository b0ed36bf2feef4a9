use log::warn;

use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::game_state::outcome::Outcome;
use crate::input_handler::{InputError, PlayerInput};

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            input_source,
            renderer,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Runs until the input source asks to exit, returning the outcome of the
    /// position at that point.
    pub fn run(&mut self) -> Result<Outcome, InputError> {
        loop {
            let current_turn = self.engine.state().turn();
            let outcome = self.engine.outcome();
            self.renderer.render(&mut self.ui, &self.engine, current_turn);

            let input = match self.input_source.get_input(current_turn, outcome) {
                Ok(input) => input,
                Err(InputError::InvalidInput { input }) => {
                    println!("Invalid input {:?}, please try again.", input);
                    continue;
                }
                Err(error) => return Err(error),
            };

            if input == PlayerInput::Exit {
                return Ok(self.engine.outcome());
            }

            match self.engine.apply_input(input) {
                Ok(()) => {
                    if let Some(delay) = self.renderer.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Err(error) => {
                    warn!("rejected {:?}: {}", input, error);
                    println!("error: {}", error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::input_source::{ConditionalInput, EngineInput, HumanInput};
    use crate::game::renderer::{ConditionalStatsRenderer, SimpleRenderer, StatsRenderer};
    use crate::game_state::player::Player;
    use std::io::Cursor;

    #[test]
    fn test_watch_plays_to_a_draw() {
        let renderer = StatsRenderer {
            delay_between_moves: None,
        };
        let mut game = GameLoop::new(EngineInput, renderer, EngineConfig::default());
        assert_eq!(game.run(), Ok(Outcome::Draw));
        assert_eq!(game.engine().state().history().len(), 9);
    }

    #[test]
    fn test_pvp_commands() {
        let input = HumanInput::new(Cursor::new("a1\nb1\nzz\na1\na2\nb2\na3\n-\nexit\n"));
        let mut game = GameLoop::new(input, SimpleRenderer, EngineConfig::default());
        assert_eq!(game.run(), Ok(Outcome::Active));
        assert_eq!(game.engine().state().history(), &[0, 3, 1, 4]);
    }

    #[test]
    fn test_moves_rejected_after_win() {
        let input = HumanInput::new(Cursor::new("a1\nb1\na2\nb2\na3\nc3\n\nexit\n"));
        let mut game = GameLoop::new(input, SimpleRenderer, EngineConfig::default());
        assert_eq!(game.run(), Ok(Outcome::Win(Player::X)));
        assert_eq!(game.engine().state().history(), &[0, 3, 1, 4, 2]);
    }

    #[test]
    fn test_reset_after_win() {
        let input = HumanInput::new(Cursor::new("a1\nb1\na2\nb2\na3\nc3\nr\n"));
        let mut game = GameLoop::new(input, SimpleRenderer, EngineConfig::default());
        // end of input reads as exit
        assert_eq!(game.run(), Ok(Outcome::Active));
        assert!(game.engine().state().history().is_empty());
        assert_eq!(game.engine().state().turn(), Player::X);
    }

    #[test]
    fn test_human_against_engine() {
        let input = ConditionalInput::new(Player::X, Cursor::new("b2\n"));
        let renderer = ConditionalStatsRenderer {
            human_player: Player::X,
        };
        let mut game = GameLoop::new(input, renderer, EngineConfig::default());
        assert_eq!(game.run(), Ok(Outcome::Active));
        // x took the center, the engine answered in the first corner
        assert_eq!(game.engine().state().history(), &[4, 0]);
    }
}
