use std::time::{Duration, Instant};

use crate::game_state::GameState;
use crate::search::{self, Pruning, Score, SearchContext, SearchError};

/// Nodes visited by one pruning strategy when evaluating a position.
#[derive(Debug, Clone)]
pub struct NodeCountReport {
    pub pruning: Pruning,
    pub value: Score,
    pub nodes: usize,
    pub cutoffs: usize,
    pub duration: Duration,
}

/// Evaluates `position` once per pruning strategy so their node counts can be
/// compared. The position is left unchanged.
pub fn count_nodes(position: &mut GameState) -> Result<Vec<NodeCountReport>, SearchError> {
    Pruning::ALL
        .iter()
        .map(|&pruning| {
            let mut context = SearchContext::new(pruning);
            let starting_time = Instant::now();
            let value = search::evaluate(&mut context, position)?;
            Ok(NodeCountReport {
                pruning,
                value,
                nodes: context.searched_node_count(),
                cutoffs: context.cutoff_count(),
                duration: starting_time.elapsed(),
            })
        })
        .collect()
}

pub fn run_count_nodes(mut position: GameState) -> Result<(), SearchError> {
    let reports = count_nodes(&mut position)?;

    for report in reports.iter() {
        let nodes_per_second = report.nodes as f64 / report.duration.as_secs_f64();
        println!(
            "pruning: {}, value: {}, nodes: {}, cutoffs: {}, duration: {:?}, nodes per second: {:.0}",
            report.pruning,
            report.value,
            report.nodes,
            report.cutoffs,
            report.duration,
            nodes_per_second
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe_position;

    #[test]
    fn test_count_nodes_from_empty_board() {
        let mut position = GameState::empty();
        let reports = count_nodes(&mut position).unwrap();
        let nodes: Vec<usize> = reports.iter().map(|r| r.nodes).collect();
        assert_eq!(nodes, vec![549_946, 146_120, 94_978]);
        assert!(reports.iter().all(|r| r.value == 0));
        assert_eq!(position, GameState::empty());
    }

    #[test]
    fn test_count_nodes_for_terminal_position() {
        let mut position = tictactoe_position! {
            x x x
            o o .
            . . .
        };
        let reports = count_nodes(&mut position).unwrap();
        assert!(reports.iter().all(|r| r.nodes == 1 && r.value == 1));
    }
}
