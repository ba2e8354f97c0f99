//! Engine configuration.

use crate::eval::Jitter;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// Knobs shared by the command line and the UCI `setoption` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched per move, counting the root move.
    pub depth: u8,
    /// Seed for the evaluation jitter; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Add tie-breaking jitter to evaluations.
    pub jitter: bool,
}

impl EngineConfig {
    /// Build the jitter source this configuration describes.
    pub fn jitter_source(&self) -> Jitter {
        match (self.jitter, self.seed) {
            (false, _) => Jitter::disabled(),
            (true, Some(seed)) => Jitter::seeded(seed),
            (true, None) => Jitter::from_entropy(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
            jitter: true,
        }
    }
}
