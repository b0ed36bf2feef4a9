//! Play command - play a game against the computer.

use structopt::StructOpt;
use tictactoe::game::input_source::ConditionalInput;
use tictactoe::game::renderer::ConditionalStatsRenderer;
use tictactoe::game_state::player::Player;
use tictactoe::game_state::{GameState, EMPTY_POSITION};
use tictactoe::search::Pruning;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "x")]
    pub player: Player,
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: GameState,
    #[structopt(long, default_value = "alpha-beta-win-cutoff")]
    pub pruning: Pruning,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.starting_position, self.pruning);
        let input = ConditionalInput::stdin(self.player);
        let renderer = ConditionalStatsRenderer {
            human_player: self.player,
        };
        run_game_loop(input, renderer, config);
    }
}
