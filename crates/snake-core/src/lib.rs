//! Core chess types and the position oracle consumed by the search.

mod color;
mod error;
mod oracle;
mod outcome;
mod piece_kind;
mod position;

pub use chess::{ChessMove as Move, Square};
pub use color::Color;
pub use error::{FenError, MoveError};
pub use oracle::PositionOracle;
pub use outcome::{Outcome, Termination};
pub use piece_kind::PieceKind;
pub use position::{Position, STARTING_FEN};
