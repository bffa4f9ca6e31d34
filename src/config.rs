//! Run configuration
//!
//! Word length bounds and the word list source. Values come from defaults,
//! then `WORD_GRAPH_*` environment variables, then command-line flags.

use crate::core::MAX_LANES;
use crate::wordlists::WordSource;
use std::env;
use thiserror::Error;

/// Default shortest word length
pub const MIN_WORD_LEN: usize = 2;

/// Default longest word length
pub const MAX_WORD_LEN: usize = 6;

/// Environment variable overriding the minimum length
pub const ENV_MIN_LEN: &str = "WORD_GRAPH_MIN_LEN";

/// Environment variable overriding the maximum length
pub const ENV_MAX_LEN: &str = "WORD_GRAPH_MAX_LEN";

/// Environment variable naming the word list (`sample` or a file path)
pub const ENV_WORDLIST: &str = "WORD_GRAPH_WORDLIST";

/// Invalid configuration, always fatal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum word length must be at least 1")]
    ZeroMinLength,
    #[error("minimum word length {min} exceeds maximum {max}")]
    InvertedRange { min: usize, max: usize },
    #[error("maximum word length {0} exceeds the {MAX_LANES} letters one encoding can hold")]
    MaxTooLong(usize),
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Settings for one graph build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    pub min_len: usize,
    pub max_len: usize,
    pub source: WordSource,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            min_len: MIN_WORD_LEN,
            max_len: MAX_WORD_LEN,
            source: WordSource::Embedded,
        }
    }
}

impl GraphConfig {
    /// Defaults overridden by any `WORD_GRAPH_*` variables that are set
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidNumber` for a length variable that does
    /// not parse. The result is not validated; call `validate` after
    /// applying any further overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with a custom variable lookup
    ///
    /// # Errors
    /// See `from_env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_MIN_LEN) {
            config.min_len = parse_len(ENV_MIN_LEN, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_LEN) {
            config.max_len = parse_len(ENV_MAX_LEN, &value)?;
        }
        if let Some(value) = lookup(ENV_WORDLIST) {
            config.source = WordSource::from_name(&value);
        }

        Ok(config)
    }

    /// Check the length bounds against the encoding limits
    ///
    /// # Errors
    /// Returns `ConfigError` if `min_len` is zero, `min_len > max_len`, or
    /// `max_len` exceeds `MAX_LANES`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_len == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        if self.max_len > MAX_LANES {
            return Err(ConfigError::MaxTooLong(self.max_len));
        }
        if self.min_len > self.max_len {
            return Err(ConfigError::InvertedRange {
                min: self.min_len,
                max: self.max_len,
            });
        }
        Ok(())
    }

    /// All configured lengths, shortest first
    #[must_use]
    pub const fn lengths(&self) -> std::ops::RangeInclusive<usize> {
        self.min_len..=self.max_len
    }
}

fn parse_len(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        })
}
