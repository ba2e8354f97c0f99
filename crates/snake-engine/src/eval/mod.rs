//! Static evaluation.
//!
//! A position scores as the sum of four terms, all oriented towards White:
//! checkmate (±[`MATE_SCORE`]), check (±[`CHECK_SCORE`]), material, and a
//! small random jitter that breaks ties between otherwise equal lines.

pub mod jitter;
pub mod material;
pub mod score;

use snake_core::{Color, PositionOracle};

pub use jitter::Jitter;
pub use material::{material, piece_value, PIECE_VALUES};
use score::{Score, CHECK_SCORE, MATE_SCORE};

/// `-MATE_SCORE` when White is mated, `+MATE_SCORE` when Black is, else 0.
///
/// Mate is always inflicted on the side to move, so the sign comes from the
/// side to move at `position`, not from whoever started the search.
pub fn checkmate_term<O: PositionOracle>(position: &O) -> Score {
    if position.is_checkmate() {
        -position.side_to_move().sign() * MATE_SCORE
    } else {
        0.0
    }
}

/// `-CHECK_SCORE` when White is in check, `+CHECK_SCORE` when Black is, else 0.
pub fn check_term<O: PositionOracle>(position: &O) -> Score {
    if position.is_in_check() {
        -position.side_to_move().sign() * CHECK_SCORE
    } else {
        0.0
    }
}

/// Evaluation without jitter.
pub fn evaluate_static<O: PositionOracle>(position: &O) -> Score {
    checkmate_term(position) + check_term(position) + material(position)
}

/// Leaf evaluator: the static terms plus a fresh jitter draw per call.
#[derive(Debug, Clone)]
pub struct Evaluator {
    jitter: Jitter,
}

impl Evaluator {
    pub fn new(jitter: Jitter) -> Self {
        Self { jitter }
    }

    /// An evaluator whose scores are exactly [`evaluate_static`].
    pub fn deterministic() -> Self {
        Self::new(Jitter::disabled())
    }

    /// Score `position` from White's perspective.
    pub fn evaluate<O: PositionOracle>(&mut self, position: &O) -> Score {
        evaluate_static(position) + self.jitter.sample()
    }
}

/// The side whose scores are maximized.
#[inline]
pub(crate) fn is_maximizing(color: Color) -> bool {
    color == Color::White
}
