//! Evaluate command - report the value of a position under perfect play.

use structopt::StructOpt;
use tictactoe::game::engine::Engine;
use tictactoe::game_state::GameState;
use tictactoe::search::Pruning;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct EvaluateArgs {
    #[structopt(long = "position")]
    pub starting_position: GameState,
    #[structopt(long, default_value = "alpha-beta-win-cutoff")]
    pub pruning: Pruning,
}

impl Command for EvaluateArgs {
    fn execute(self) {
        let mut engine = Engine::with_config(create_config(self.starting_position, self.pruning));

        match engine.evaluate() {
            Ok(value) => {
                let stats = engine.get_search_stats();
                println!("{} (nodes searched: {})", value, stats.nodes);
            }
            Err(err) => eprintln!("Failed to evaluate position: {}", err),
        }
    }
}
