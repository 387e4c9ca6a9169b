//! Session configuration module.
//!
//! This module defines how a script session reads words and reports results:
//! the symbol alphabet, case folding, word length limits, and output format.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest accepted value for `max_word_length`.
pub const MAX_WORD_LENGTH_LIMIT: usize = 1 << 20;

/// Alphabet the session stores words over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolMode {
    /// One symbol per Unicode scalar value
    #[default]
    Chars,
    /// One symbol per UTF-8 byte
    Bytes,
}

/// Format of the results written by a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per result
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Alphabet used to split words into symbols
    pub symbols: SymbolMode,

    /// Whether words are lowercased before they reach the trie
    pub fold_case: bool,

    /// Maximum word length, in symbols
    pub max_word_length: usize,

    /// Output format for command results
    pub output: OutputFormat,

    /// Whether the first failing command aborts the run
    pub stop_on_error: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            symbols: SymbolMode::default(),
            fold_case: false,
            max_word_length: 4096,
            output: OutputFormat::default(),
            stop_on_error: false,
        }
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == 0 {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }

        if self.max_word_length > MAX_WORD_LENGTH_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "session.max_word_length".to_string(),
                message: format!("must not exceed {MAX_WORD_LENGTH_LIMIT}"),
            });
        }

        Ok(())
    }
}
