//! # Command Validator
//!
//! A strict validator for small administrative subcommands. Parses
//! `show-log`, `set-time`, `add-user`, and `help` invocations and
//! checks their option values against numeric ranges, enumerated sets,
//! and shape patterns before anything acts on them.
//!
//! ## Features
//!
//! - One configurable rule table per subcommand instead of ad-hoc
//!   per-command checks
//! - Explicit present/absent option state, so a value of `0` is never
//!   mistaken for a missing option
//! - Exact error messages with deterministic exit codes (1 for an
//!   invalid value, 2 for a missing required option)
//!
//! ## Example
//!
//! ```
//! use cmdcheck::config::Config;
//! use cmdcheck::core::{CommandValidator, ParsedOptions, Subcommand};
//!
//! let validator = CommandValidator::new(&Config::default())?;
//! let options = ParsedOptions {
//!     hour: Some(7),
//!     minute: Some(30),
//!     second: Some(0),
//!     ..Default::default()
//! };
//! validator.validate(Subcommand::SetTime, &options)?;
//! # Ok::<(), cmdcheck::error::ValidatorError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
