//! Watch command - watch the computer play against itself.

use std::time::Duration;

use structopt::StructOpt;
use tictactoe::game::input_source::EngineInput;
use tictactoe::game::renderer::StatsRenderer;
use tictactoe::game_state::{GameState, EMPTY_POSITION};
use tictactoe::search::Pruning;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: GameState,
    #[structopt(long, default_value = "alpha-beta-win-cutoff")]
    pub pruning: Pruning,
    #[structopt(long, default_value = "500")]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.starting_position, self.pruning);
        let renderer = StatsRenderer {
            delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
        };
        run_game_loop(EngineInput, renderer, config);
    }
}
