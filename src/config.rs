//! Configuration management for the address book.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory.

use crate::cli::Locale;
use crate::error::{ConfigError, ConfigResult};
use crate::repositories::DEFAULT_STORE_FILE;
use std::env;
use std::path::PathBuf;

/// Configuration for the address book application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON store file (default: "address_book.json")
    pub store_path: PathBuf,

    /// Language of prompts and notices (default: Ukrainian)
    pub locale: Locale,

    /// Records per table when listing a large book (default: 10)
    pub page_size: usize,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Store file path (default: address_book.json)
    /// - `ADDRESS_BOOK_LOCALE`: `uk` or `en` (default: uk)
    /// - `ADDRESS_BOOK_PAGE_SIZE`: Records per listed table, > 0 (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() does not print to stdout
        let _ = dotenvy::dotenv();
        Self::from_vars()
    }

    fn from_vars() -> ConfigResult<Self> {
        let defaults = Self::default();

        let store_path = match env::var("ADDRESS_BOOK_FILE") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.store_path,
        };

        let locale = match env::var("ADDRESS_BOOK_LOCALE") {
            Ok(val) => val.parse::<Locale>().map_err(|_| ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_LOCALE".to_string(),
                reason: format!("Must be uk or en, got: {}", val),
            })?,
            Err(_) => defaults.locale,
        };

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            store_path,
            locale,
            page_size,
            log_level,
        })
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
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            locale: Locale::Uk,
            page_size: 10,
            log_level: "warn".to_string(),
        }
    }
}
