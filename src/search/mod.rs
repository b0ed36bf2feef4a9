//! Exhaustive adversarial search over `GameState`.
//!
//! Tic-tac-toe is small enough to search to the end of every line, so there is
//! no depth limit and no heuristic evaluation: leaves are scored from their
//! outcome alone and every value is exact.
//!
//! `minimax_value` walks the tree by playing a move, recursing, and undoing the
//! move again, so the state it is handed is mutated during the call but
//! restored before it returns. Two cutoffs are available (see `Pruning`):
//! the usual alpha-beta window, and a win cutoff that stops enumerating moves
//! as soon as the side to move has found a value no sibling can beat.

mod context;


use std::cmp::{max, min};
use std::time::Instant;

use log::debug;
use thiserror::Error;

use crate::game_state::error::GameStateError;
use crate::game_state::outcome::Outcome;
use crate::game_state::player::Player;
use crate::game_state::GameState;

pub use context::{Pruning, SearchContext, SearchStats};

/// Game-theoretic value of a position: always one of `WIN_O`, `DRAW`, `WIN_X`.
pub type Score = i8;

pub const WIN_X: Score = 1;
pub const DRAW: Score = 0;
pub const WIN_O: Score = -1;

/// Bounds of the initial alpha-beta window, strictly outside every value.
pub const ALPHA_INIT: Score = -2;
pub const BETA_INIT: Score = 2;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("no available moves")]
    NoLegalMoves,
    #[error("game state error: {0}")]
    GameState(#[from] GameStateError),
}

/// Score of a finished game, or `None` while it is still in progress.
pub fn terminal_score(outcome: Outcome) -> Option<Score> {
    match outcome {
        Outcome::Active => None,
        Outcome::Draw => Some(DRAW),
        Outcome::Win(Player::X) => Some(WIN_X),
        Outcome::Win(Player::O) => Some(WIN_O),
    }
}

/// The best value `player` could possibly reach.
fn best_possible(player: Player) -> Score {
    if player.maximize_score() {
        WIN_X
    } else {
        WIN_O
    }
}

/// The worst value `player` could possibly reach.
fn worst_possible(player: Player) -> Score {
    best_possible(player.opposite())
}

/// Computes the value of `state` under optimal play from both sides within the
/// window `[alpha, beta]`. Increments the node counter once per call; it never
/// resets it.
pub fn minimax_value(
    context: &mut SearchContext,
    state: &mut GameState,
    mut alpha: Score,
    mut beta: Score,
) -> Result<Score, SearchError> {
    context.increment_node_count();

    if let Some(score) = terminal_score(state.outcome()) {
        return Ok(score);
    }

    let pruning = context.pruning();
    let player = state.turn();
    let maximizing = player.maximize_score();
    let mut best = worst_possible(player);

    for index in state.legal_moves() {
        state.play(index)?;
        let child_value = minimax_value(context, state, alpha, beta)?;
        state.undo()?;

        if maximizing {
            best = max(best, child_value);
            alpha = max(alpha, child_value);
        } else {
            best = min(best, child_value);
            beta = min(beta, child_value);
        }

        if pruning.window_cutoff() && alpha > beta {
            context.increment_cutoff_count();
            break;
        }

        if pruning.win_cutoff() && best == best_possible(player) {
            context.increment_cutoff_count();
            break;
        }
    }

    Ok(best)
}

/// Computes the value of `state` with a fresh set of statistics.
pub fn evaluate(context: &mut SearchContext, state: &mut GameState) -> Result<Score, SearchError> {
    context.reset_stats();
    let started = Instant::now();

    let value = minimax_value(context, state, ALPHA_INIT, BETA_INIT)?;

    context.record_result(value, started.elapsed());
    debug!(
        "evaluated {} as {} ({} nodes)",
        state.to_position_string(),
        value,
        context.searched_node_count()
    );
    Ok(value)
}

/// Picks the best move for the side to move. Candidates are tried in ascending
/// cell order and only a strictly better value replaces the current choice, so
/// among equally good moves the lowest index wins.
pub fn select_move(context: &mut SearchContext, state: &mut GameState) -> Result<usize, SearchError> {
    context.reset_stats();
    let started = Instant::now();

    let player = state.turn();
    let candidates = state.legal_moves();

    if candidates.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let mut best: Option<(usize, Score)> = None;
    for index in candidates {
        state.play(index)?;
        let value = minimax_value(context, state, ALPHA_INIT, BETA_INIT)?;
        state.undo()?;
        debug!("candidate {} for {} scored {}", index, player, value);

        let improves = match best {
            None => true,
            Some((_, best_value)) if player.maximize_score() => value > best_value,
            Some((_, best_value)) => value < best_value,
        };
        if improves {
            best = Some((index, value));
        }
    }

    let (best_move, best_value) = best.ok_or(SearchError::NoLegalMoves)?;
    context.record_result(best_value, started.elapsed());
    debug!(
        "selected {} for {} with value {} ({} nodes)",
        best_move,
        player,
        best_value,
        context.searched_node_count()
    );
    Ok(best_move)
}
