//! Command-line argument parsing
//!
//! Constrained values are declared as plain optionals here; every
//! presence check and value constraint runs through the core rule
//! tables so the exit-code contract lives in one place.

use clap::{Parser, Subcommand};

/// Command Validator - checks administrative subcommands before they run
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "cmdcheck", disable_help_subcommand = true)]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to validate
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the system log
    ShowLog {
        /// Log verbosity level (info, warn, error)
        #[arg(short = 'v', long)]
        verbosity: Option<String>,

        /// Restrict the view to one day (mon..sun)
        #[arg(long)]
        day: Option<String>,
    },

    /// Set the system time
    SetTime {
        /// Hour to set
        #[arg(long, allow_negative_numbers = true)]
        hour: Option<i64>,

        /// Minute to set
        #[arg(long, allow_negative_numbers = true)]
        minute: Option<i64>,

        /// Second to set
        #[arg(long, allow_negative_numbers = true)]
        second: Option<i64>,

        /// Timezone name
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Add a user account
    AddUser {
        /// Name of the account to create
        #[arg(long)]
        username: Option<String>,
    },

    /// Print usage information
    Help,

    /// Anything that is not a known subcommand
    #[command(external_subcommand)]
    External(Vec<String>),
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let args = Args::try_parse_from(["cmdcheck", "show-log"]).unwrap();
        assert!(!args.debug);
        assert!(matches!(args.command, Some(Command::ShowLog { .. })));
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = Args::try_parse_from(["cmdcheck", "--debug", "show-log"]).unwrap();
        assert!(args.debug);
    }

    #[test]
    fn test_parse_set_time_with_options() {
        let args = Args::try_parse_from([
            "cmdcheck", "set-time", "--hour", "7", "--minute", "30", "--second", "0",
        ])
        .unwrap();
        match args.command {
            Some(Command::SetTime {
                hour,
                minute,
                second,
                timezone,
            }) => {
                assert_eq!(hour, Some(7));
                assert_eq!(minute, Some(30));
                assert_eq!(second, Some(0));
                assert!(timezone.is_none());
            }
            _ => panic!("Expected SetTime command"),
        }
    }

    #[test]
    fn test_parse_negative_hour() {
        let args = Args::try_parse_from(["cmdcheck", "set-time", "--hour", "-1"]).unwrap();
        match args.command {
            Some(Command::SetTime { hour, .. }) => assert_eq!(hour, Some(-1)),
            _ => panic!("Expected SetTime command"),
        }
    }

    #[test]
    fn test_parse_verbosity_short_flag() {
        let args = Args::try_parse_from(["cmdcheck", "show-log", "-v", "warn"]).unwrap();
        match args.command {
            Some(Command::ShowLog { verbosity, .. }) => {
                assert_eq!(verbosity.as_deref(), Some("warn"));
            }
            _ => panic!("Expected ShowLog command"),
        }
    }

    #[test]
    fn test_unknown_subcommand_is_external() {
        let args = Args::try_parse_from(["cmdcheck", "bogus-subcommand"]).unwrap();
        match args.command {
            Some(Command::External(tokens)) => {
                assert_eq!(tokens, vec!["bogus-subcommand".to_string()]);
            }
            _ => panic!("Expected External command"),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["cmdcheck"]).unwrap();
        assert!(args.command.is_none());
    }
}
