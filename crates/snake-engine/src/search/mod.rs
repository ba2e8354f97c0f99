//! Fixed-depth minimax search with alpha-beta pruning.

pub mod alphabeta;
pub mod minimax;
pub mod select;

use crate::config::EngineConfig;
use crate::eval::score::Score;
use crate::eval::Evaluator;

use snake_core::PositionOracle;

/// Counters accumulated while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into the search, the root's children included.
    pub nodes: u64,
    /// Leaf evaluations.
    pub evaluations: u64,
}

/// Result of one move selection.
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// The move that was committed to the position.
    pub best_move: M,
    /// Score of `best_move`, from White's perspective.
    pub score: Score,
    /// Every root move with its score, in enumeration order.
    pub root_scores: Vec<(M, Score)>,
    /// Plies searched, counting the root move.
    pub depth: u8,
    /// Work done for this selection only.
    pub stats: SearchStats,
}

/// Owns the evaluator and the search depth, and counts the work done.
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluator: Evaluator,
    depth: u8,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher from an engine configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_evaluator(Evaluator::new(config.jitter_source()), config.depth)
    }

    pub fn with_evaluator(evaluator: Evaluator, depth: u8) -> Self {
        Self {
            evaluator,
            depth,
            stats: SearchStats::default(),
        }
    }

    /// Plies searched by [`select_move`](Self::select_move).
    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    pub fn set_evaluator(&mut self, evaluator: Evaluator) {
        self.evaluator = evaluator;
    }

    /// Counters accumulated since creation or the last reset.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Evaluate a leaf, counting it.
    pub fn evaluate<O: PositionOracle>(&mut self, position: &O) -> Score {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(position)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
