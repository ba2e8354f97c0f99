//! The rules-engine contract consumed by evaluation and search.

use std::fmt;
use std::hash::Hash;

use crate::color::Color;
use crate::outcome::Outcome;
use crate::piece_kind::PieceKind;

/// A single live, mutable game position.
///
/// Search never copies a position: it explores a branch by calling
/// [`apply_move`](Self::apply_move), recursing, and then
/// [`undo_move`](Self::undo_move). Callers must keep apply/undo strictly
/// LIFO so the live position always mirrors the current search path.
pub trait PositionOracle {
    /// An opaque move token.
    type Move: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    /// A board location that may hold a piece.
    type Location: Copy;

    /// Legal moves in a deterministic order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play `mv` on the live position.
    fn apply_move(&mut self, mv: Self::Move);

    /// Take back the most recently applied move.
    fn undo_move(&mut self);

    /// The decided result, if the game is over.
    fn outcome(&self) -> Option<Outcome>;

    /// Whether the game is over at this position.
    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    fn side_to_move(&self) -> Color;

    /// Whether the side to move is in check.
    fn is_in_check(&self) -> bool;

    /// Whether the side to move has been checkmated.
    fn is_checkmate(&self) -> bool {
        self.is_in_check() && self.legal_moves().is_empty()
    }

    /// Every location on the board, occupied or not.
    fn locations(&self) -> impl Iterator<Item = Self::Location> + '_;

    fn piece_at(&self, location: Self::Location) -> Option<(PieceKind, Color)>;
}
