//! Configuration management for the rolo REPL.
//!
//! Settings come from environment variables (an optional `.env` file is
//! loaded via `dotenvy`, which never prints to stdout). Everything has a
//! default; only malformed values are errors.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Known tracing level names accepted for `LOG_LEVEL`.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for the rolo REPL.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before each command is read (default: "Enter command: ")
    pub prompt: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLO_PROMPT`: REPL prompt text (default: "Enter command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let prompt = env::var("ROLO_PROMPT").unwrap_or_else(|_| "Enter command: ".to_string());

        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "error".to_string())
            .to_ascii_lowercase();

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), log_level),
            });
        }

        Ok(Config { prompt, log_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("ROLO_PROMPT");
        env::remove_var("LOG_LEVEL");
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, "Enter command: ");
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_overrides() {
        clear_env();
        env::set_var("ROLO_PROMPT", "> ");
        env::set_var("LOG_LEVEL", "DEBUG");

        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, "> ");
        // Level names are folded to lowercase
        assert_eq!(config.log_level, "debug");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_rejects_bad_log_level() {
        clear_env();
        env::set_var("LOG_LEVEL", "loud");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("LOG_LEVEL"));

        clear_env();
    }
}
