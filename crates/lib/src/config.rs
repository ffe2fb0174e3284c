//! Runtime configuration.
//!
//! [`BotConfig`] holds the knobs of an [`App`](crate::App): the simulated
//! typing delay, the feedback confirmation window, the starting theme and an
//! optional RNG seed for reproducible suggestions. It is read from an optional
//! JSON file; the binary then layers command-line flags and `MESSBOT_*`
//! environment variables on top.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::constants::{DEFAULT_FEEDBACK_RESET_MS, DEFAULT_TYPING_DELAY_MS};
use crate::theme::Theme;

/// Errors raised while loading configuration.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`BotConfig`].
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A single value could not be parsed.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Delay before Chef Bot's reply appears. Zero replies immediately.
    pub typing_delay_ms: u64,
    /// How long the feedback confirmation shows before the form clears.
    pub feedback_reset_ms: u64,
    pub theme: Theme,
    /// Seed for dish draws; `None` uses OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            feedback_reset_ms: DEFAULT_FEEDBACK_RESET_MS,
            theme: Theme::Light,
            rng_seed: None,
        }
    }
}

impl BotConfig {
    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn feedback_reset(&self) -> Duration {
        Duration::from_millis(self.feedback_reset_ms)
    }
}
