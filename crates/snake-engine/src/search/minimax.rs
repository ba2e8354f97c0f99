//! Full-width minimax without pruning.
//!
//! Visits every node [`Searcher::search`] could visit and returns the same
//! score; used to check the pruned search.

use snake_core::PositionOracle;

use crate::eval::score::{Score, INF};
use crate::search::Searcher;

impl Searcher {
    /// Minimax value of `position` to `depth` plies, without pruning.
    pub fn minimax<O: PositionOracle>(
        &mut self,
        position: &mut O,
        depth: u8,
        maximizing: bool,
    ) -> Score {
        self.stats.nodes += 1;

        if depth == 0 || position.is_terminal() {
            return self.evaluate(position);
        }

        let mut best = if maximizing { -INF } else { INF };
        for mv in position.legal_moves() {
            position.apply_move(mv);
            let score = self.minimax(position, depth - 1, !maximizing);
            position.undo_move();

            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use snake_core::Position;

    use crate::eval::Evaluator;
    use crate::search::Searcher;

    #[test]
    fn counts_every_node() {
        let mut position = Position::new();
        let mut searcher = Searcher::with_evaluator(Evaluator::deterministic(), 2);
        let score = searcher.minimax(&mut position, 2, true);
        // 1 root + 20 replies + 20 * 20 leaves.
        assert_eq!(searcher.stats().nodes, 421);
        assert_eq!(searcher.stats().evaluations, 400);
        assert_eq!(score, 0.0);
        assert_eq!(position, Position::new());
    }
}
