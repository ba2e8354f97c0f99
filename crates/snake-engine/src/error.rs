//! Engine errors.

use snake_core::Outcome;

/// Caller contract violations reported by the move selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The game is already decided.
    #[error("game is over: {outcome}")]
    GameOver {
        /// How the game ended.
        outcome: Outcome,
    },
    /// The side to move has no legal move.
    #[error("no legal moves in position")]
    NoLegalMoves,
    /// Move selection needs at least one ply of search.
    #[error("search depth must be at least 1")]
    ZeroDepth,
}
