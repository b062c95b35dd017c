//! Startup configuration from environment variables.
//!
//! - `PIG_LEDGER_PATH`: ledger file (default: `highscore_list.txt`)
//! - `PIG_COMPUTER_DELAY_MS`: pause before each computer move (default: 1000)
//! - `PIG_SEED`: seed for the die and computer policy (default: OS entropy)
//! - `PIG_LOG_PATH`: log file; logging is off when unset
//!
//! Missing or unparsable values fall back to the defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::{ComputerPolicy, Die};
use crate::types::{DEFAULT_COMPUTER_DELAY_MS, DEFAULT_LEDGER_PATH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub ledger_path: PathBuf,
    pub computer_delay: Duration,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ledger_path: PathBuf::from(DEFAULT_LEDGER_PATH),
            computer_delay: Duration::from_millis(DEFAULT_COMPUTER_DELAY_MS),
            seed: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let ledger_path = non_empty("PIG_LEDGER_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_PATH));

        let computer_delay = non_empty("PIG_COMPUTER_DELAY_MS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_COMPUTER_DELAY_MS));

        let seed = non_empty("PIG_SEED").and_then(|s| s.parse().ok());
        let log_path = non_empty("PIG_LOG_PATH").map(PathBuf::from);

        Self {
            ledger_path,
            computer_delay,
            seed,
            log_path,
        }
    }

    /// Die for a new match. With a seed, match `n` always gets the same faces.
    pub fn die(&self, match_no: u64) -> Die {
        match self.seed {
            Some(seed) => Die::new(seed.wrapping_add(match_no)),
            None => Die::from_entropy(),
        }
    }

    pub fn policy(&self, match_no: u64) -> ComputerPolicy {
        match self.seed {
            Some(seed) => ComputerPolicy::new(seed.wrapping_add(match_no).rotate_left(32)),
            None => ComputerPolicy::from_entropy(),
        }
    }
}
