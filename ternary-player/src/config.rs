//! Search settings for [`AiPlayer`](crate::AiPlayer).

use derive_more::{Display, Error};
use std::time::Duration;

/// The search depth used when none is configured.
pub const DEFAULT_DEPTH: u8 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "search depth must be at least 1")]
    ZeroDepth,
}

/// How an [`AiPlayer`](crate::AiPlayer) searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root. Passes are free.
    pub depth: u8,
    /// A move is never returned sooner than this after it was asked for.
    pub min_think_time: Duration,
    /// Search root moves in parallel. Needs the `rayon` feature (on by default); ignored otherwise.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            min_think_time: Duration::ZERO,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_min_think_time(mut self, min_think_time: Duration) -> Self {
        self.min_think_time = min_think_time;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}
