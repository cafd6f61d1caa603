//! Centralized configuration for directory-cli.
//!
//! All environment variables are loaded and validated at startup to fail fast
//! on misconfiguration rather than mid-command.

use std::env;

use thiserror::Error;
use user_directory::users::{DEFAULT_LIMIT, MAX_LIMIT};

/// Upper bound on `list --limit` when DIRECTORY_MAX_LIMIT is unset.
pub const DEFAULT_MAX_LIMIT: usize = 1000;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Configuration error.
#[derive(Debug, Error)]
#[error("Configuration error for {field}: {message}")]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log format (LOG_FORMAT, default: pretty)
    pub log_format: LogFormat,
    /// Page size for `list` without --limit (DIRECTORY_DEFAULT_LIMIT, default: 10)
    pub default_limit: usize,
    /// Largest accepted page size (DIRECTORY_MAX_LIMIT, default: 1000)
    pub max_limit: usize,
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format =
            LogFormat::from_str(&lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".into()));

        let default_limit = parse_usize(
            "DIRECTORY_DEFAULT_LIMIT",
            lookup("DIRECTORY_DEFAULT_LIMIT"),
            DEFAULT_LIMIT,
        )?;
        let max_limit = parse_usize(
            "DIRECTORY_MAX_LIMIT",
            lookup("DIRECTORY_MAX_LIMIT"),
            DEFAULT_MAX_LIMIT,
        )?;

        if max_limit == 0 {
            return Err(ConfigError {
                field: "DIRECTORY_MAX_LIMIT",
                message: "must be at least 1".into(),
            });
        }
        if max_limit > MAX_LIMIT {
            return Err(ConfigError {
                field: "DIRECTORY_MAX_LIMIT",
                message: format!("{} exceeds the library page cap of {}", max_limit, MAX_LIMIT),
            });
        }
        if default_limit > max_limit {
            return Err(ConfigError {
                field: "DIRECTORY_DEFAULT_LIMIT",
                message: format!("{} exceeds DIRECTORY_MAX_LIMIT ({})", default_limit, max_limit),
            });
        }

        Ok(Self {
            log_format,
            default_limit,
            max_limit,
        })
    }

    /// Resolve the page size for `list`, rejecting values over the maximum.
    pub fn resolve_limit(&self, requested: Option<usize>) -> Result<usize, String> {
        let limit = requested.unwrap_or(self.default_limit);
        if limit > self.max_limit {
            return Err(format!(
                "limit {} exceeds maximum of {}",
                limit, self.max_limit
            ));
        }
        Ok(limit)
    }
}

fn parse_usize(
    field: &'static str,
    raw: Option<String>,
    default: usize,
) -> Result<usize, ConfigError> {
    match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(s) => s.parse().map_err(|e| ConfigError {
            field,
            message: format!("Invalid number '{}': {}", s, e),
        }),
    }
}
