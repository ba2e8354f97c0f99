//! Self-play: let the searcher play both sides until the game ends.

use std::time::{Duration, Instant};

use tracing::info;

use snake_core::{Outcome, PositionOracle};

use crate::error::EngineError;
use crate::eval::score::Score;
use crate::search::Searcher;

/// One move played during self-play.
#[derive(Debug, Clone, PartialEq)]
pub struct PlyRecord<M> {
    /// Halfmoves played before this move, counted from the game start.
    pub ply: u32,
    pub mv: M,
    /// Root score of the move, from White's perspective.
    pub score: Score,
}

impl<M> PlyRecord<M> {
    /// Fullmove number this move belongs to (1-based).
    pub fn move_number(&self) -> u32 {
        self.ply / 2 + 1
    }
}

/// Everything a finished (or capped) self-play game produced.
#[derive(Debug, Clone)]
pub struct GameRecord<M> {
    pub moves: Vec<PlyRecord<M>>,
    /// `None` when the game was stopped by the ply cap.
    pub outcome: Option<Outcome>,
    /// Evaluation of the final position, jitter included.
    pub final_eval: Score,
    pub elapsed: Duration,
}

/// Play moves on `position` until the game is decided or `max_plies` moves
/// have been made, calling `on_move` after each one.
///
/// `start_ply` numbers the first move, so a game resumed from a FEN keeps
/// its move numbers.
pub fn play_game<O, F>(
    position: &mut O,
    searcher: &mut Searcher,
    start_ply: u32,
    max_plies: Option<u32>,
    mut on_move: F,
) -> Result<GameRecord<O::Move>, EngineError>
where
    O: PositionOracle,
    F: FnMut(&PlyRecord<O::Move>),
{
    let start = Instant::now();
    let mut moves = Vec::new();
    let mut ply = start_ply;

    while position.outcome().is_none() {
        if max_plies.is_some_and(|cap| moves.len() as u32 >= cap) {
            info!(plies = moves.len(), "ply cap reached");
            break;
        }

        let result = searcher.select_move(position)?;
        let record = PlyRecord {
            ply,
            mv: result.best_move,
            score: result.score,
        };
        on_move(&record);
        moves.push(record);
        ply = ply.saturating_add(1);
    }

    let outcome = position.outcome();
    let final_eval = searcher.evaluate(position);
    let elapsed = start.elapsed();

    if let Some(outcome) = outcome {
        info!(%outcome, plies = moves.len(), ?elapsed, "game over");
    }

    Ok(GameRecord {
        moves,
        outcome,
        final_eval,
        elapsed,
    })
}
