//! Count nodes command - compare how much of the tree each pruning strategy visits.

use structopt::StructOpt;
use tictactoe::game::node_counter::run_count_nodes;
use tictactoe::game_state::{GameState, EMPTY_POSITION};

use super::Command;

#[derive(StructOpt)]
pub struct CountNodesArgs {
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub starting_position: GameState,
}

impl Command for CountNodesArgs {
    fn execute(self) {
        if let Err(err) = run_count_nodes(self.starting_position) {
            eprintln!("Failed to count nodes: {}", err);
        }
    }
}
