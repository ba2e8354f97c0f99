//! Line-oriented UCI engine loop.
//!
//! Searches run to completion on the calling thread, so commands are
//! handled strictly one after another.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use snake_core::{Color, Position, PositionOracle};
use snake_engine::{EngineConfig, EngineError, Evaluator, Score, Searcher};

use crate::command::{parse_command, Command, GoParams, UciOption};
use crate::error::UciError;

/// The UCI engine, holding the current position, configuration and searcher.
pub struct UciEngine {
    position: Position,
    config: EngineConfig,
    searcher: Searcher,
}

impl UciEngine {
    /// Create a new engine with the starting position.
    pub fn new(config: EngineConfig) -> Self {
        let searcher = Searcher::new(&config);
        Self {
            position: Position::new(),
            config,
            searcher,
        }
    }

    /// Run the UCI loop on stdin/stdout until `quit` or input closes.
    pub fn run(self) -> Result<(), UciError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the UCI loop over arbitrary input and output streams.
    pub fn run_with<R: BufRead, W: Write>(mut self, input: R, mut output: W) -> Result<(), UciError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Uci) => self.handle_uci(&mut output)?,
                Ok(Command::IsReady) => writeln!(output, "readyok")?,
                Ok(Command::UciNewGame) => self.position = Position::new(),
                Ok(Command::Position(position)) => self.position = position,
                Ok(Command::Go(params)) => self.handle_go(params, &mut output)?,
                Ok(Command::SetOption(option)) => self.handle_setoption(option),
                Ok(Command::Stop) => {}
                Ok(Command::Quit) => break,
                Ok(Command::Unknown(_)) => {}
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
            output.flush()?;
        }

        info!("snake shutting down");
        Ok(())
    }

    fn handle_uci<W: Write>(&self, output: &mut W) -> Result<(), UciError> {
        writeln!(output, "id name snake")?;
        writeln!(output, "id author snake developers")?;
        writeln!(
            output,
            "option name Depth type spin default {} min 1 max 32",
            self.config.depth
        )?;
        writeln!(output, "option name Seed type string default none")?;
        writeln!(
            output,
            "option name Jitter type check default {}",
            self.config.jitter
        )?;
        writeln!(output, "uciok")?;
        Ok(())
    }

    fn handle_setoption(&mut self, option: UciOption) {
        match option {
            UciOption::Depth(depth) => {
                self.config.depth = depth;
                self.searcher.set_depth(depth);
            }
            UciOption::Seed(seed) => {
                self.config.seed = seed;
                self.searcher
                    .set_evaluator(Evaluator::new(self.config.jitter_source()));
            }
            UciOption::Jitter(enabled) => {
                self.config.jitter = enabled;
                self.searcher
                    .set_evaluator(Evaluator::new(self.config.jitter_source()));
            }
        }
        debug!(config = ?self.config, "option updated");
    }

    fn handle_go<W: Write>(&mut self, params: GoParams, output: &mut W) -> Result<(), UciError> {
        let depth = params.depth.unwrap_or(self.config.depth);
        let side_to_move = self.position.side_to_move();
        self.searcher.set_depth(depth);

        // Search a copy: the GUI sends the position again before every go.
        let mut position = self.position.clone();
        let result = self.searcher.select_move(&mut position);
        self.searcher.set_depth(self.config.depth);

        match result {
            Ok(result) => {
                writeln!(
                    output,
                    "info depth {} score cp {} nodes {}",
                    result.depth,
                    centipawns(result.score, side_to_move),
                    result.stats.nodes
                )?;
                writeln!(output, "bestmove {}", result.best_move)?;
            }
            Err(e @ (EngineError::GameOver { .. } | EngineError::NoLegalMoves)) => {
                debug!(error = %e, "no move to search");
                writeln!(output, "bestmove 0000")?;
            }
            Err(e @ EngineError::ZeroDepth) => {
                warn!(error = %e, "go rejected");
                writeln!(output, "bestmove 0000")?;
            }
        }
        Ok(())
    }
}

/// White-oriented pawn units to centipawns for the side to move, which is
/// what UCI `score cp` reports.
fn centipawns(score: Score, side_to_move: Color) -> i32 {
    (side_to_move.sign() * score * 100.0).round() as i32
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
