use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::Score;

/// Which cutoffs `minimax_value` is allowed to take. Every strategy computes
/// the same value; they differ only in how many nodes they visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pruning {
    /// Plain minimax, every child of every node is searched.
    None,
    /// Stop enumerating moves once the alpha-beta window closes.
    AlphaBeta,
    /// Alpha-beta, and additionally stop as soon as the side to move has
    /// found a forced win.
    AlphaBetaWinCutoff,
}

impl Pruning {
    pub const ALL: [Pruning; 3] = [
        Pruning::None,
        Pruning::AlphaBeta,
        Pruning::AlphaBetaWinCutoff,
    ];

    pub fn window_cutoff(&self) -> bool {
        !matches!(self, Pruning::None)
    }

    pub fn win_cutoff(&self) -> bool {
        matches!(self, Pruning::AlphaBetaWinCutoff)
    }
}

impl Default for Pruning {
    fn default() -> Self {
        Pruning::AlphaBetaWinCutoff
    }
}

impl fmt::Display for Pruning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Pruning::None => "none",
            Pruning::AlphaBeta => "alpha-beta",
            Pruning::AlphaBetaWinCutoff => "alpha-beta-win-cutoff",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Pruning {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Pruning::None),
            "alpha-beta" => Ok(Pruning::AlphaBeta),
            "alpha-beta-win-cutoff" => Ok(Pruning::AlphaBetaWinCutoff),
            _ => Err("invalid pruning; options are: none, alpha-beta, alpha-beta-win-cutoff"),
        }
    }
}

/// Statistics collected during search.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub nodes: usize,
    pub cutoffs: usize,
    pub last_value: Option<Score>,
    pub last_duration: Option<Duration>,
}

/// Per-search state threaded through the recursion: the pruning strategy and
/// the counters it accumulates.
#[derive(Clone, Debug, Default)]
pub struct SearchContext {
    pruning: Pruning,
    stats: SearchStats,
}

impl SearchContext {
    pub fn new(pruning: Pruning) -> Self {
        Self {
            pruning,
            stats: SearchStats::default(),
        }
    }

    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn searched_node_count(&self) -> usize {
        self.stats.nodes
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs
    }

    pub fn last_value(&self) -> Option<Score> {
        self.stats.last_value
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    pub(super) fn increment_node_count(&mut self) {
        self.stats.nodes += 1;
    }

    pub(super) fn increment_cutoff_count(&mut self) {
        self.stats.cutoffs += 1;
    }

    pub(super) fn record_result(&mut self, value: Score, duration: Duration) {
        self.stats.last_value = Some(value);
        self.stats.last_duration = Some(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pruning() {
        for pruning in Pruning::ALL.iter() {
            assert_eq!(pruning.to_string().parse::<Pruning>(), Ok(*pruning));
        }
        assert!("fast".parse::<Pruning>().is_err());
    }

    #[test]
    fn test_pruning_flags() {
        assert!(!Pruning::None.window_cutoff());
        assert!(!Pruning::None.win_cutoff());
        assert!(Pruning::AlphaBeta.window_cutoff());
        assert!(!Pruning::AlphaBeta.win_cutoff());
        assert!(Pruning::AlphaBetaWinCutoff.window_cutoff());
        assert!(Pruning::AlphaBetaWinCutoff.win_cutoff());
    }

    #[test]
    fn test_reset_stats() {
        let mut context = SearchContext::default();
        context.increment_node_count();
        context.increment_cutoff_count();
        context.record_result(1, Duration::from_millis(3));
        context.reset_stats();
        assert_eq!(context.searched_node_count(), 0);
        assert_eq!(context.cutoff_count(), 0);
        assert_eq!(context.last_value(), None);
        assert_eq!(context.last_search_duration(), None);
        assert_eq!(context.pruning(), Pruning::AlphaBetaWinCutoff);
    }
}
