//! Shared utilities for CLI commands.

use tictactoe::game::engine::EngineConfig;
use tictactoe::game::input_source::InputSource;
use tictactoe::game::r#loop::GameLoop;
use tictactoe::game::renderer::GameRenderer;
use tictactoe::game_state::GameState;
use tictactoe::search::Pruning;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    match game.run() {
        Ok(outcome) => println!("Finished ({})", outcome),
        Err(error) => eprintln!("error: {}", error),
    }
}

pub(crate) fn create_config(starting_position: GameState, pruning: Pruning) -> EngineConfig {
    EngineConfig {
        starting_position,
        pruning,
    }
}
