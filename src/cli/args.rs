//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_nodes::CountNodesArgs,
    evaluate::EvaluateArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "tictactoe",
    about = "A tic-tac-toe engine that searches the whole game tree with minimax and alpha-beta pruning"
)]
pub enum TicTacToe {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches every line to the end. You play x unless you choose otherwise with `--player` (x, o or random). The initial position can be given with `--position` (default: empty board)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. The initial position can be given with `--position` (default: empty board)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself, pausing `--delay-ms` between moves (default: 500). The initial position can be given with `--position` (default: empty board)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Print the best move for the side to move in the position given with `--position` (required), as a cell like `b2` and its index."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "evaluate",
        about = "Print the value of the position given with `--position` (required) under perfect play: 1 if x wins, -1 if o wins, 0 for a draw."
    )]
    Evaluate(EvaluateArgs),
    #[structopt(
        name = "count-nodes",
        about = "Search a position (default: empty board) once with each pruning strategy and report the number of nodes visited and the time it took."
    )]
    CountNodes(CountNodesArgs),
}

impl crate::cli::commands::Command for TicTacToe {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            Evaluate(cmd),
            CountNodes(cmd),
        }
    }
}
