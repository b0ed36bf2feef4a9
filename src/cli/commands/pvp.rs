//! PvP command - play a game against another human.

use structopt::StructOpt;
use tictactoe::game::input_source::HumanInput;
use tictactoe::game::renderer::SimpleRenderer;
use tictactoe::game_state::{GameState, EMPTY_POSITION};
use tictactoe::search::Pruning;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: GameState,
}

impl Command for PvpArgs {
    fn execute(self) {
        // a blank line lets the engine move for the side to move
        let config = create_config(self.starting_position, Pruning::default());
        run_game_loop(HumanInput::stdin(), SimpleRenderer, config);
    }
}
