//! Evaluation, alpha-beta search and move selection for snake.

pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;

pub use config::EngineConfig;
pub use error::EngineError;
pub use eval::score::{Score, CHECK_SCORE, INF, JITTER_BOUND, MATE_SCORE};
pub use eval::{evaluate_static, Evaluator, Jitter};
pub use game::{play_game, GameRecord, PlyRecord};
pub use search::{SearchResult, SearchStats, Searcher};
