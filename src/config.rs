//! Configuration management for the command validator
//!
//! Centralizes the tunable validation limits and provides validation.

use crate::{cli::Args, error::ValidatorError};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Validation limits
    pub limits: LimitsConfig,
}

/// Bounds applied by the rule tables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Inclusive upper bound for `--hour`
    pub hour_max: i64,
    /// Inclusive upper bound for `--minute`
    pub minute_max: i64,
    /// Inclusive upper bound for `--second`
    pub second_max: i64,
    /// Maximum username length, leading character included
    pub username_max_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            limits: LimitsConfig::default(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            hour_max: 24,
            minute_max: 60,
            second_max: 60,
            username_max_len: 32,
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ValidatorError> {
        let config = Self {
            debug: args.debug,
            ..Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ValidatorError> {
        if self.limits.username_max_len == 0 {
            return Err(ValidatorError::config(
                "username length limit must be at least 1",
            ));
        }

        if self.limits.hour_max < 0 || self.limits.minute_max < 0 || self.limits.second_max < 0 {
            return Err(ValidatorError::config(
                "time field upper bounds must not be negative",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = LimitsConfig::default();
        assert_eq!(limits.hour_max, 24);
        assert_eq!(limits.minute_max, 60);
        assert_eq!(limits.second_max, 60);
        assert_eq!(limits.username_max_len, 32);
    }

    #[test]
    fn test_validate_rejects_zero_username_len() {
        let mut config = Config::default();
        config.limits.username_max_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_bounds() {
        let mut config = Config::default();
        config.limits.minute_max = -1;
        assert!(config.validate().is_err());
    }
}
