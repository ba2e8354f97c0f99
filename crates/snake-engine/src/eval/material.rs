//! Material balance evaluation.
//!
//! Sums a fixed value per piece, positive for White and negative for Black.

use snake_core::{Color, PieceKind, PositionOracle};

use crate::eval::score::Score;

/// Piece values indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   | 1     |
/// | Knight | 3     |
/// | Bishop | 3.15  |
/// | Rook   | 5     |
/// | Queen  | 9     |
/// | King   | 0     |
pub const PIECE_VALUES: [Score; PieceKind::COUNT] = [
    1.0,  // Pawn
    3.0,  // Knight
    3.15, // Bishop
    5.0,  // Rook
    9.0,  // Queen
    0.0,  // King
];

/// Value of a single piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.index()]
}

/// Material balance from White's perspective.
///
/// Pieces are counted per kind before any value is applied, so equal
/// material on both sides sums to exactly zero.
pub fn material<O: PositionOracle>(position: &O) -> Score {
    let mut balance = [0i32; PieceKind::COUNT];
    for (kind, color) in position
        .locations()
        .filter_map(|location| position.piece_at(location))
    {
        balance[kind.index()] += match color {
            Color::White => 1,
            Color::Black => -1,
        };
    }

    PieceKind::ALL
        .iter()
        .zip(balance)
        .filter(|&(_, count)| count != 0)
        .map(|(&kind, count)| piece_value(kind) * f64::from(count))
        .sum()
}
