//! Game outcomes.

use std::fmt;

use crate::color::Color;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    /// 150 halfmoves without a capture or pawn move.
    SeventyFiveMoves,
    /// The same position occurred five times.
    FivefoldRepetition,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Termination::Checkmate => "checkmate",
            Termination::Stalemate => "stalemate",
            Termination::InsufficientMaterial => "insufficient material",
            Termination::SeventyFiveMoves => "seventy-five moves",
            Termination::FivefoldRepetition => "fivefold repetition",
        };
        f.write_str(name)
    }
}

/// The decided result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    /// `None` for a draw.
    pub winner: Option<Color>,
    pub termination: Termination,
}

impl Outcome {
    /// A win for `winner`.
    pub const fn decisive(winner: Color, termination: Termination) -> Self {
        Self {
            winner: Some(winner),
            termination,
        }
    }

    /// A drawn game.
    pub const fn draw(termination: Termination) -> Self {
        Self {
            winner: None,
            termination,
        }
    }

    /// PGN-style result string: `1-0`, `0-1` or `1/2-1/2`.
    pub const fn result(&self) -> &'static str {
        match self.winner {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.result(), self.termination)
    }
}
