//! Error types for position setup.

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The board fields were rejected by the move generator.
    #[error("invalid FEN \"{fen}\": {reason}")]
    InvalidBoard {
        /// The offending FEN string.
        fen: String,
        /// What the parser reported.
        reason: String,
    },
    /// A move counter (halfmove clock or fullmove number) is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
}

/// Errors from applying a move given in UCI notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The string is not a legal move in the current position.
    #[error("illegal or malformed move: {uci_move}")]
    Illegal {
        /// The UCI move string.
        uci_move: String,
    },
}
