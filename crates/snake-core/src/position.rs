//! A standard chess position backed by the `chess` crate's move generator.
//!
//! The `chess` crate works copy-make: every move produces a new board. This
//! wrapper keeps the boards it replaced on an undo stack so the search can
//! treat it as one live position mutated in place. It also tracks what the
//! crate leaves out, namely the halfmove clock, the fullmove number and the
//! repetition history, so automatic game ends can be detected.

use std::fmt;
use std::str::FromStr;

use chess::{BitBoard, Board, BoardStatus, ChessMove, MoveGen, Piece, Square, ALL_SQUARES, EMPTY};

use crate::color::Color;
use crate::error::{FenError, MoveError};
use crate::oracle::PositionOracle;
use crate::outcome::{Outcome, Termination};
use crate::piece_kind::PieceKind;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmoves without progress after which the game is drawn automatically.
const SEVENTY_FIVE_MOVE_LIMIT: u32 = 150;

/// Occurrences of one position after which the game is drawn automatically.
const FIVEFOLD: usize = 5;

/// Board state restored by [`Position::undo_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    board: Board,
    halfmove_clock: u32,
    fullmove_number: u32,
}

/// A chess game position with move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    /// Halfmoves since the last capture or pawn move.
    halfmove_clock: u32,
    /// Starts at 1, incremented after Black moves.
    fullmove_number: u32,
    /// States replaced by applied moves, most recent last.
    undo: Vec<Snapshot>,
    /// Hash of every position reached, the current one last.
    hashes: Vec<u64>,
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::default(), 0, 1)
    }

    fn from_board(board: Board, halfmove_clock: u32, fullmove_number: u32) -> Self {
        Self {
            board,
            halfmove_clock,
            fullmove_number,
            undo: Vec::new(),
            hashes: vec![board.get_hash()],
        }
    }

    /// Halfmoves since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Halfmoves played since the start of the game, saturating at
    /// `u32::MAX` for oversized FEN move numbers.
    pub fn ply(&self) -> u32 {
        let black_to_move = u32::from(self.side_to_move() == Color::Black);
        (self.fullmove_number - 1)
            .saturating_mul(2)
            .saturating_add(black_to_move)
    }

    /// Number of moves currently applied on top of the initial position.
    pub fn depth(&self) -> usize {
        self.undo.len()
    }

    /// Apply a move given in UCI notation (`e2e4`, `e7e8q`).
    pub fn push_uci(&mut self, uci_move: &str) -> Result<ChessMove, MoveError> {
        let mv = self.parse_uci(uci_move)?;
        self.apply_move(mv);
        Ok(mv)
    }

    /// Find the legal move written as `uci_move`.
    pub fn parse_uci(&self, uci_move: &str) -> Result<ChessMove, MoveError> {
        MoveGen::new_legal(&self.board)
            .find(|mv| mv.to_string() == uci_move)
            .ok_or_else(|| MoveError::Illegal {
                uci_move: uci_move.to_string(),
            })
    }

    /// Serialize to FEN.
    pub fn fen(&self) -> String {
        let board = self.board.to_string();
        let fields: Vec<&str> = board.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            fields.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// How many times the current position has occurred since the last
    /// irreversible move.
    fn repetitions(&self) -> usize {
        let current = self.board.get_hash();
        self.hashes
            .iter()
            .rev()
            .take((self.halfmove_clock as usize).saturating_add(1))
            .filter(|&&hash| hash == current)
            .count()
    }

    /// Neither side can deliver mate: no pawns, rooks or queens remain and
    /// the minor pieces are at most one, or all bishops on one square color.
    fn is_insufficient_material(&self) -> bool {
        let heavy = *self.board.pieces(Piece::Pawn)
            | *self.board.pieces(Piece::Rook)
            | *self.board.pieces(Piece::Queen);
        if heavy != EMPTY {
            return false;
        }

        let knights = *self.board.pieces(Piece::Knight);
        let bishops = *self.board.pieces(Piece::Bishop);
        if (knights | bishops).popcnt() <= 1 {
            return true;
        }

        knights == EMPTY && same_square_color(bishops)
    }
}

/// Whether every square in `squares` has the same color.
fn same_square_color(squares: BitBoard) -> bool {
    let mut parities = squares.map(|sq| (sq.get_rank().to_index() + sq.get_file().to_index()) % 2);
    match parities.next() {
        Some(first) => parities.all(|parity| parity == first),
        None => true,
    }
}

impl PositionOracle for Position {
    type Move = ChessMove;
    type Location = Square;

    fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn apply_move(&mut self, mv: ChessMove) {
        debug_assert!(self.board.legal(mv), "illegal move {mv} applied");

        let irreversible = self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            || self.board.piece_on(mv.get_dest()).is_some();
        let black_moved = self.board.side_to_move() == chess::Color::Black;

        self.undo.push(Snapshot {
            board: self.board,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        self.board = self.board.make_move_new(mv);
        self.halfmove_clock = if irreversible {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if black_moved {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.hashes.push(self.board.get_hash());
    }

    /// # Panics
    ///
    /// Panics when no move has been applied.
    fn undo_move(&mut self) {
        let snapshot = self
            .undo
            .pop()
            .expect("undo_move called without a matching apply_move");
        self.hashes.pop();
        self.board = snapshot.board;
        self.halfmove_clock = snapshot.halfmove_clock;
        self.fullmove_number = snapshot.fullmove_number;
    }

    /// Checkmate first, then insufficient material ahead of stalemate, so a
    /// stalemated king facing a lone minor piece reports insufficient
    /// material.
    fn outcome(&self) -> Option<Outcome> {
        match self.board.status() {
            BoardStatus::Checkmate => {
                let loser = Color::from(self.board.side_to_move());
                return Some(Outcome::decisive(!loser, Termination::Checkmate));
            }
            _ if self.is_insufficient_material() => {
                return Some(Outcome::draw(Termination::InsufficientMaterial));
            }
            BoardStatus::Stalemate => return Some(Outcome::draw(Termination::Stalemate)),
            BoardStatus::Ongoing => {}
        }

        if self.halfmove_clock >= SEVENTY_FIVE_MOVE_LIMIT {
            Some(Outcome::draw(Termination::SeventyFiveMoves))
        } else if self.repetitions() >= FIVEFOLD {
            Some(Outcome::draw(Termination::FivefoldRepetition))
        } else {
            None
        }
    }

    fn side_to_move(&self) -> Color {
        Color::from(self.board.side_to_move())
    }

    fn is_in_check(&self) -> bool {
        *self.board.checkers() != EMPTY
    }

    fn is_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    fn locations(&self) -> impl Iterator<Item = Square> + '_ {
        ALL_SQUARES.iter().copied()
    }

    fn piece_at(&self, location: Square) -> Option<(PieceKind, Color)> {
        let piece = self.board.piece_on(location)?;
        let color = self.board.color_on(location)?;
        Some((PieceKind::from(piece), Color::from(color)))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Position {
    type Err = FenError;

    /// Parse a FEN string. The move counters are optional and default to
    /// `0 1`.
    fn from_str(fen: &str) -> Result<Self, FenError> {
        let board = Board::from_str(fen).map_err(|err| FenError::InvalidBoard {
            fen: fen.to_string(),
            reason: err.to_string(),
        })?;

        let fields: Vec<&str> = fen.split_whitespace().collect();
        let halfmove_clock = parse_counter(fields.get(4), "halfmove clock", 0)?;
        let fullmove_number = parse_counter(fields.get(5), "fullmove number", 1)?.max(1);

        Ok(Self::from_board(board, halfmove_clock, fullmove_number))
    }
}

fn parse_counter(field: Option<&&str>, name: &'static str, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| FenError::InvalidMoveCounter {
            field: name,
            found: value.to_string(),
        }),
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fen())
    }
}
