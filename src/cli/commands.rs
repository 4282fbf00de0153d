//! Command implementations for the CLI

use crate::{
    cli::{Args, Command},
    config::Config,
    core::{CommandValidator, ParsedOptions, Subcommand},
    error::{Result, ValidatorError},
};
use clap::CommandFactory;
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> Result<()> {
    let validator = CommandValidator::new(config)?;

    match command {
        Command::ShowLog { verbosity, day } => {
            execute_show_log(&validator, verbosity.clone(), day.clone())
        }
        Command::SetTime {
            hour,
            minute,
            second,
            timezone,
        } => execute_set_time(&validator, *hour, *minute, *second, timezone.clone()),
        Command::AddUser { username } => execute_add_user(&validator, username.clone()),
        Command::Help => print_help(),
        Command::External(tokens) => {
            let name = tokens.first().map(String::as_str).unwrap_or_default();
            Err(ValidatorError::invalid_value("subcommand", name))
        }
    }
}

/// Execute the show-log command
#[instrument(skip(validator))]
fn execute_show_log(
    validator: &CommandValidator,
    verbosity: Option<String>,
    day: Option<String>,
) -> Result<()> {
    let options = ParsedOptions {
        verbosity,
        day,
        ..Default::default()
    };
    validator.validate(Subcommand::ShowLog, &options)?;

    info!(
        "Showing log (verbosity: {}, day: {})",
        options.verbosity.as_deref().unwrap_or("info"),
        options.day.as_deref().unwrap_or("all")
    );
    Ok(())
}

/// Execute the set-time command
#[instrument(skip(validator))]
fn execute_set_time(
    validator: &CommandValidator,
    hour: Option<i64>,
    minute: Option<i64>,
    second: Option<i64>,
    timezone: Option<String>,
) -> Result<()> {
    let options = ParsedOptions {
        hour,
        minute,
        second,
        timezone,
        ..Default::default()
    };
    validator.validate(Subcommand::SetTime, &options)?;

    // All three are required, so validation guarantees presence
    if let (Some(hour), Some(minute), Some(second)) =
        (options.hour, options.minute, options.second)
    {
        info!(
            "Setting time to {:02}:{:02}:{:02} ({})",
            hour,
            minute,
            second,
            options.timezone.as_deref().unwrap_or("local time"),
        );
    }
    Ok(())
}

/// Execute the add-user command
#[instrument(skip(validator))]
fn execute_add_user(validator: &CommandValidator, username: Option<String>) -> Result<()> {
    let options = ParsedOptions {
        username,
        ..Default::default()
    };
    validator.validate(Subcommand::AddUser, &options)?;

    if let Some(username) = &options.username {
        info!("Adding user '{}'", username);
    }
    Ok(())
}

/// Print the generated usage text
pub fn print_help() -> Result<()> {
    Args::command()
        .print_help()
        .map_err(|e| ValidatorError::config(format!("Failed to print help: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn test_execute_show_log() {
        let command = Command::ShowLog {
            verbosity: Some("warn".to_string()),
            day: None,
        };
        assert!(execute_command(&config(), &command).is_ok());
    }

    #[test]
    fn test_execute_show_log_invalid_verbosity() {
        let command = Command::ShowLog {
            verbosity: Some("critical".to_string()),
            day: None,
        };
        let err = execute_command(&config(), &command).unwrap_err();
        assert_eq!(err, ValidatorError::invalid_value("--verbosity", "critical"));
    }

    #[test]
    fn test_execute_set_time_midnight() {
        let command = Command::SetTime {
            hour: Some(0),
            minute: Some(0),
            second: Some(0),
            timezone: None,
        };
        assert!(execute_command(&config(), &command).is_ok());
    }

    #[test]
    fn test_execute_set_time_missing_minute() {
        let command = Command::SetTime {
            hour: Some(12),
            minute: None,
            second: Some(0),
            timezone: None,
        };
        let err = execute_command(&config(), &command).unwrap_err();
        assert_eq!(err, ValidatorError::missing_option("--minute"));
    }

    #[test]
    fn test_execute_add_user_missing_username() {
        let command = Command::AddUser { username: None };
        let err = execute_command(&config(), &command).unwrap_err();
        assert_eq!(err, ValidatorError::missing_option("--username"));
    }

    #[test]
    fn test_execute_external_subcommand() {
        let command = Command::External(vec!["bogus-subcommand".to_string()]);
        let err = execute_command(&config(), &command).unwrap_err();
        assert_eq!(
            err,
            ValidatorError::invalid_value("subcommand", "bogus-subcommand")
        );
    }
}
