//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::matching::SearchSettings;
use std::env;
use std::path::PathBuf;

/// Default location of the address book file.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the address book is loaded from and saved to
    pub book_path: PathBuf,

    /// Optional file for persistent command history
    pub history_path: Option<PathBuf>,

    /// Maximum number of `search` results to show (default: 5)
    pub max_match_results: usize,

    /// Minimum `search` confidence (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Address book file (default: `addressbook.json`)
    /// - `ADDRESS_BOOK_HISTORY`: Command history file (default: none)
    /// - `MAX_MATCH_RESULTS`: Max search results (default: 5)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: Min search confidence (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is normal
        let _ = dotenvy::dotenv();

        let book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let history_path = env::var("ADDRESS_BOOK_HISTORY")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let max_match_results = Self::parse_env_usize("MAX_MATCH_RESULTS", 5)?;
        if max_match_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_MATCH_RESULTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let match_confidence_threshold = Self::parse_env_u8("MATCH_CONFIDENCE_THRESHOLD", 30)?;
        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            history_path,
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Search limits for the `search` command.
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            max_results: self.max_match_results,
            min_confidence: self.match_confidence_threshold,
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            history_path: None,
            max_match_results: 5,
            match_confidence_threshold: 30,
            log_level: "warn".to_string(),
        }
    }
}
