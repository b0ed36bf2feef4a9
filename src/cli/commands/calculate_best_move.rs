//! Calculate best move command - determine the best move from a position.

use structopt::StructOpt;
use tictactoe::game::engine::Engine;
use tictactoe::game_state::GameState;
use tictactoe::input_handler::cell_to_notation;
use tictactoe::search::Pruning;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(long = "position")]
    pub starting_position: GameState,
    #[structopt(long, default_value = "alpha-beta-win-cutoff")]
    pub pruning: Pruning,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let mut engine = Engine::with_config(create_config(self.starting_position, self.pruning));

        if let Some(outcome) = engine.check_game_over() {
            eprintln!("There are no moves to make, the game is over ({}).", outcome);
            return;
        }

        match engine.get_best_move() {
            Ok(best_move) => {
                let notation = cell_to_notation(best_move).unwrap_or_default();
                println!("{} ({})", notation, best_move);
            }
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
