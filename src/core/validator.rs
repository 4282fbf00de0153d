//! Command validation entry point
//!
//! Owns one compiled rule table per subcommand so regexes are built
//! once per process, not per check.

use crate::config::Config;
use crate::core::options::{ParsedOptions, Subcommand};
use crate::core::rules::RuleSet;
use crate::error::Result;
use tracing::{debug, instrument};

/// Validator holding the compiled rule tables for all subcommands
#[derive(Debug)]
pub struct CommandValidator {
    show_log: RuleSet,
    set_time: RuleSet,
    add_user: RuleSet,
    help: RuleSet,
}

impl CommandValidator {
    /// Build all rule tables from the configured limits
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            show_log: RuleSet::for_subcommand(Subcommand::ShowLog, &config.limits)?,
            set_time: RuleSet::for_subcommand(Subcommand::SetTime, &config.limits)?,
            add_user: RuleSet::for_subcommand(Subcommand::AddUser, &config.limits)?,
            help: RuleSet::for_subcommand(Subcommand::Help, &config.limits)?,
        })
    }

    /// Validate an option record against the subcommand's rule table
    #[instrument(skip(self, options))]
    pub fn validate(&self, subcommand: Subcommand, options: &ParsedOptions) -> Result<()> {
        debug!("Validating {} options", subcommand.name());
        self.ruleset(subcommand).validate(options)
    }

    fn ruleset(&self, subcommand: Subcommand) -> &RuleSet {
        match subcommand {
            Subcommand::ShowLog => &self.show_log,
            Subcommand::SetTime => &self.set_time,
            Subcommand::AddUser => &self.add_user,
            Subcommand::Help => &self.help,
        }
    }
}
