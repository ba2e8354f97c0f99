//! Score type and the fixed magnitudes of the evaluation terms.
//!
//! Scores are oriented towards White: positive is good for White no matter
//! whose turn it is.

/// A position score in pawn units.
pub type Score = f64;

/// Magnitude of the checkmate term. Dominates any reachable material balance.
pub const MATE_SCORE: Score = 100.0;

/// Magnitude of the check term.
pub const CHECK_SCORE: Score = 2.0;

/// Largest absolute value of the tie-breaking jitter.
pub const JITTER_BOUND: Score = 0.001;

/// Unbounded search window edge.
pub const INF: Score = f64::INFINITY;
