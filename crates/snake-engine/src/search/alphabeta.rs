//! Minimax with alpha-beta pruning over a single live position.

use snake_core::PositionOracle;

use crate::eval::score::{Score, INF};
use crate::search::Searcher;

impl Searcher {
    /// Best score reachable from `position` within `depth` plies.
    ///
    /// `maximizing` says whether the side to move at this node maximizes
    /// the White-oriented score. It is flipped on every recursion and never
    /// re-derived from the position. `(alpha, beta)` is the window inherited
    /// from the path to this node.
    ///
    /// Every move applied here is undone before returning, on pruning exits
    /// too, so `position` is unchanged when the call returns.
    pub fn search<O: PositionOracle>(
        &mut self,
        position: &mut O,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        debug_assert!(alpha <= beta, "search entered with alpha {alpha} > beta {beta}");
        self.stats.nodes += 1;

        if depth == 0 || position.is_terminal() {
            return self.evaluate(position);
        }

        let mut best = if maximizing { -INF } else { INF };

        for mv in position.legal_moves() {
            position.apply_move(mv);
            let score = self.search(position, depth - 1, alpha, beta, !maximizing);
            position.undo_move();

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use snake_core::{Position, PositionOracle};

    use crate::eval::score::{Score, INF, MATE_SCORE};
    use crate::eval::{evaluate_static, Evaluator};
    use crate::search::Searcher;

    fn searcher() -> Searcher {
        Searcher::with_evaluator(Evaluator::deterministic(), 3)
    }

    fn root_search(fen: &str, depth: u8) -> Score {
        let mut position: Position = fen.parse().unwrap();
        let maximizing = position.side_to_move() == snake_core::Color::White;
        searcher().search(&mut position, depth, -INF, INF, maximizing)
    }

    #[test]
    fn depth_zero_is_static_evaluation() {
        let mut position = Position::new();
        let mut searcher = searcher();
        assert_eq!(
            searcher.search(&mut position, 0, -INF, INF, true),
            evaluate_static(&position)
        );
        assert_eq!(searcher.stats().evaluations, 1);
    }

    #[test]
    fn terminal_position_is_evaluated_regardless_of_depth() {
        let fen = "7k/6Q1/5K2/8/8/8/8/8 b - - 0 1";
        let position: Position = fen.parse().unwrap();
        assert_eq!(root_search(fen, 4), evaluate_static(&position));
    }

    #[test]
    fn finds_mate_in_one_for_white() {
        // Scholar's mate: Qxf7# is available.
        let score = root_search(
            "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
            1,
        );
        assert!(score > MATE_SCORE - 10.0, "mate score expected, got {score}");
    }

    #[test]
    fn finds_mate_in_one_for_black() {
        let score = root_search(
            "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2",
            1,
        );
        assert!(score < -MATE_SCORE + 10.0, "mate score expected, got {score}");
    }

    #[test]
    fn position_is_restored_after_search() {
        let mut position: Position =
            "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4"
                .parse()
                .unwrap();
        let before = position.clone();
        searcher().search(&mut position, 3, -INF, INF, true);
        assert_eq!(position, before);
    }

    #[test]
    fn search_visits_fewer_nodes_than_minimax() {
        let mut position = Position::new();
        let mut pruned = searcher();
        let mut full = searcher();
        let a = pruned.search(&mut position, 3, -INF, INF, true);
        let b = full.minimax(&mut position, 3, true);
        assert_eq!(a, b);
        assert!(pruned.stats().nodes < full.stats().nodes);
    }
}
