//! Error types for the command validator
//!
//! Provides structured error handling with exact user-facing messages
//! and deterministic exit codes.

use thiserror::Error;

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// An option was present but its value failed a constraint
pub const EXIT_INVALID_VALUE: i32 = 1;

/// A required option was not given
pub const EXIT_MISSING_OPTION: i32 = 2;

/// Main error type for the command validator
///
/// The `Display` output of `InvalidValue` and `MissingOption` is the
/// exact text written to stderr before the process terminates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// A present option whose value fails a constraint
    #[error("Error: invalid value '{value}' for '{option}'")]
    InvalidValue { option: String, value: String },

    /// An absent required option
    #[error("Error: option '{option}' was not given")]
    MissingOption { option: String },

    /// Construction-time failures (rule compilation, bad limits)
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ValidatorError {
    /// Create a new invalid-value error
    pub fn invalid_value(option: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            option: option.into(),
            value: value.into(),
        }
    }

    /// Create a new missing-option error
    pub fn missing_option(option: impl Into<String>) -> Self {
        Self::MissingOption {
            option: option.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidValue { .. } | Self::Config { .. } => EXIT_INVALID_VALUE,
            Self::MissingOption { .. } => EXIT_MISSING_OPTION,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ValidatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = ValidatorError::invalid_value("--hour", "25");
        assert_eq!(err.to_string(), "Error: invalid value '25' for '--hour'");
        assert_eq!(err.exit_code(), EXIT_INVALID_VALUE);
    }

    #[test]
    fn test_missing_option_message() {
        let err = ValidatorError::missing_option("--username");
        assert_eq!(err.to_string(), "Error: option '--username' was not given");
        assert_eq!(err.exit_code(), EXIT_MISSING_OPTION);
    }

    #[test]
    fn test_subcommand_spelling() {
        let err = ValidatorError::invalid_value("subcommand", "bogus");
        assert_eq!(
            err.to_string(),
            "Error: invalid value 'bogus' for 'subcommand'"
        );
    }

    #[test]
    fn test_config_exit_code() {
        let err = ValidatorError::config("bad limits");
        assert_eq!(err.exit_code(), EXIT_INVALID_VALUE);
    }
}
