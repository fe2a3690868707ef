//! Game session control
//!
//! The session state machine plus the settings every front end shares.

mod miss_log;
mod session;

pub use miss_log::MissLog;
pub use session::{GuessError, MAX_ATTEMPTS, Session, SessionState, Turn};

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Settings for playing sessions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    /// Skip the name prompt when set
    pub player_name: Option<String>,
    /// Reproducible target selection
    pub seed: Option<u64>,
    /// Mirror miss letters to this file
    pub miss_log: Option<PathBuf>,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            player_name: None,
            seed: None,
            miss_log: None,
        }
    }

    /// Random source for drawing targets
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                log::info!("using seed {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }

    /// Create a fresh miss log for a new session, if one is configured
    ///
    /// # Errors
    /// Returns an error if the log file cannot be recreated.
    pub fn open_miss_log(&self) -> std::io::Result<Option<MissLog>> {
        self.miss_log.as_ref().map(MissLog::create).transpose()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config_allows_six_attempts() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert!(config.miss_log.is_none());
        assert!(config.open_miss_log().unwrap().is_none());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(2022),
            ..GameConfig::new()
        };

        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
