//! The per-subcommand validation rule tables
//!
//! One configurable table per subcommand replaces per-command
//! validation functions: a [`RuleSet`] is an ordered list of
//! [`FieldRule`]s, each naming an option, whether it is required, and
//! the constraint its value must satisfy.

use crate::config::LimitsConfig;
use crate::core::options::{OptionValue, ParsedOptions, Subcommand};
use crate::error::{Result, ValidatorError};
use regex::Regex;
use tracing::debug;

/// Verbosity levels accepted by `show-log`
pub const VERBOSITY_LEVELS: &[&str] = &["info", "warn", "error"];

/// Day names accepted by `show-log --day`
pub const DAY_NAMES: &[&str] = &["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// A single value constraint
#[derive(Debug)]
pub enum Constraint {
    /// Integer value within an inclusive range
    Range { min: i64, max: i64 },
    /// String value drawn from a fixed set
    OneOf(&'static [&'static str]),
    /// String value matching an anchored pattern
    Pattern(Regex),
}

impl Constraint {
    /// Check a present value against this constraint
    ///
    /// `flag` is the user-facing spelling used in the error message.
    pub fn check(&self, flag: &str, value: OptionValue<'_>) -> Result<()> {
        let ok = match (self, value) {
            (Self::Range { min, max }, OptionValue::Int(n)) => n >= *min && n <= *max,
            (Self::OneOf(set), OptionValue::Str(s)) => set.contains(&s),
            (Self::Pattern(re), OptionValue::Str(s)) => re.is_match(s),
            // A value of the wrong shape can never satisfy the constraint
            _ => false,
        };

        if ok {
            Ok(())
        } else {
            Err(ValidatorError::invalid_value(flag, value.display()))
        }
    }
}

/// One rule for one option of one subcommand
#[derive(Debug)]
pub struct FieldRule {
    /// Field name used to look the value up in [`ParsedOptions`]
    pub name: &'static str,
    /// User-facing flag spelling used in error messages
    pub flag: &'static str,
    /// Whether absence of the option is an error
    pub required: bool,
    /// Constraint a present value must satisfy
    pub constraint: Constraint,
}

impl FieldRule {
    fn required(name: &'static str, flag: &'static str, constraint: Constraint) -> Self {
        Self {
            name,
            flag,
            required: true,
            constraint,
        }
    }

    fn optional(name: &'static str, flag: &'static str, constraint: Constraint) -> Self {
        Self {
            name,
            flag,
            required: false,
            constraint,
        }
    }
}

/// Ordered list of field rules for one subcommand
#[derive(Debug)]
pub struct RuleSet {
    subcommand: Subcommand,
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// Build the rule table for a subcommand from the configured limits
    pub fn for_subcommand(subcommand: Subcommand, limits: &LimitsConfig) -> Result<Self> {
        let rules = match subcommand {
            Subcommand::ShowLog => vec![
                FieldRule::optional("verbosity", "--verbosity", Constraint::OneOf(VERBOSITY_LEVELS)),
                FieldRule::optional("day", "--day", Constraint::OneOf(DAY_NAMES)),
            ],
            Subcommand::SetTime => vec![
                FieldRule::required(
                    "hour",
                    "--hour",
                    Constraint::Range {
                        min: 0,
                        max: limits.hour_max,
                    },
                ),
                FieldRule::required(
                    "minute",
                    "--minute",
                    Constraint::Range {
                        min: 0,
                        max: limits.minute_max,
                    },
                ),
                FieldRule::required(
                    "second",
                    "--second",
                    Constraint::Range {
                        min: 0,
                        max: limits.second_max,
                    },
                ),
                FieldRule::optional("timezone", "--timezone", Constraint::Pattern(timezone_pattern()?)),
            ],
            Subcommand::AddUser => vec![FieldRule::required(
                "username",
                "--username",
                Constraint::Pattern(username_pattern(limits.username_max_len)?),
            )],
            // help carries no options
            Subcommand::Help => Vec::new(),
        };

        Ok(Self { subcommand, rules })
    }

    /// Validate an option record against this table
    ///
    /// Presence is checked before value: a required option that is
    /// absent is a missing-option error even when its type could never
    /// pass the constraint, and an absent optional option is skipped.
    pub fn validate(&self, options: &ParsedOptions) -> Result<()> {
        for rule in &self.rules {
            match options.get(rule.name) {
                Some(value) => rule.constraint.check(rule.flag, value)?,
                None if rule.required => {
                    return Err(ValidatorError::missing_option(rule.flag));
                }
                None => {}
            }
        }

        debug!(
            "{} options passed {} rule(s)",
            self.subcommand.name(),
            self.rules.len()
        );
        Ok(())
    }
}

/// Timezone names are word characters only
fn timezone_pattern() -> Result<Regex> {
    Regex::new(r"^\w+$")
        .map_err(|e| ValidatorError::config(format!("Failed to compile regex: {}", e)))
}

/// Username shape: lowercase letter or underscore, then lowercase
/// letters, digits, or underscores, at most `max_len` characters total
fn username_pattern(max_len: usize) -> Result<Regex> {
    if max_len == 0 {
        return Err(ValidatorError::config(
            "username length limit must be at least 1",
        ));
    }
    Regex::new(&format!("^[a-z_][a-z0-9_]{{0,{}}}$", max_len - 1))
        .map_err(|e| ValidatorError::config(format!("Failed to compile regex: {}", e)))
}
