//! One-ply driver: score every root move, play the best one.

use tracing::{debug, info};

use snake_core::PositionOracle;

use crate::error::EngineError;
use crate::eval::is_maximizing;
use crate::eval::score::{Score, INF};
use crate::search::{SearchResult, SearchStats, Searcher};

impl Searcher {
    /// Score every legal root move without committing any of them.
    ///
    /// Each move is searched to `depth - 1` further plies with a full
    /// window. Scores are returned in the oracle's enumeration order and
    /// `position` is unchanged afterwards.
    pub fn score_root_moves<O: PositionOracle>(
        &mut self,
        position: &mut O,
    ) -> Result<Vec<(O::Move, Score)>, EngineError> {
        if self.depth == 0 {
            return Err(EngineError::ZeroDepth);
        }
        if let Some(outcome) = position.outcome() {
            return Err(EngineError::GameOver { outcome });
        }

        let moves = position.legal_moves();
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let maximizing = is_maximizing(position.side_to_move());
        let mut scores = Vec::with_capacity(moves.len());

        for mv in moves {
            position.apply_move(mv);
            let score = self.search(position, self.depth - 1, -INF, INF, !maximizing);
            position.undo_move();

            debug!(%mv, score, "root move scored");
            scores.push((mv, score));
        }

        Ok(scores)
    }

    /// Pick the best move for the side to move and play it on `position`.
    ///
    /// White takes the highest score, Black the lowest. On an exact tie the
    /// first move in enumeration order wins.
    pub fn select_move<O: PositionOracle>(
        &mut self,
        position: &mut O,
    ) -> Result<SearchResult<O::Move>, EngineError> {
        let before = self.stats;
        let maximizing = is_maximizing(position.side_to_move());

        let root_scores = self.score_root_moves(position)?;
        let (best_move, score) =
            pick_best(&root_scores, maximizing).ok_or(EngineError::NoLegalMoves)?;

        position.apply_move(best_move);

        let stats = SearchStats {
            nodes: self.stats.nodes - before.nodes,
            evaluations: self.stats.evaluations - before.evaluations,
        };
        info!(
            best_move = %best_move,
            score,
            depth = self.depth,
            nodes = stats.nodes,
            "move selected"
        );

        Ok(SearchResult {
            best_move,
            score,
            root_scores,
            depth: self.depth,
            stats,
        })
    }
}

/// First entry with the highest score (`maximizing`) or the lowest.
pub fn pick_best<M: Copy>(scores: &[(M, Score)], maximizing: bool) -> Option<(M, Score)> {
    let mut best: Option<(M, Score)> = None;
    for &(mv, score) in scores {
        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }
    best
}
