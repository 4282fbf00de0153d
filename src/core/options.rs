//! Parsed option records and subcommand tags
//!
//! Every option is an explicit `Option<T>` so that "absent" and
//! "present with value 0" are different states. Presence is decided
//! here, never by truthiness of the value.

use serde::{Deserialize, Serialize};

/// The subcommand selecting which rule set applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subcommand {
    ShowLog,
    SetTime,
    AddUser,
    Help,
}

impl Subcommand {
    /// The spelling used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShowLog => "show-log",
            Self::SetTime => "set-time",
            Self::AddUser => "add-user",
            Self::Help => "help",
        }
    }
}

/// A scalar option value borrowed from a [`ParsedOptions`] record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue<'a> {
    Int(i64),
    Str(&'a str),
}

impl OptionValue<'_> {
    /// Render the value the way it appeared on the command line
    pub fn display(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Str(s) => (*s).to_string(),
        }
    }
}

/// Flat record of all options one invocation may carry
///
/// Populated once from the parsed command line and immutable after
/// construction. Fields irrelevant to the active subcommand stay
/// `None` and no rule ever looks at them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedOptions {
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub second: Option<i64>,
    pub timezone: Option<String>,
    pub username: Option<String>,
    pub day: Option<String>,
    pub verbosity: Option<String>,
}

impl ParsedOptions {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an option by its field name
    ///
    /// Returns `None` only when the option was not given; a present
    /// zero is `Some(OptionValue::Int(0))`.
    pub fn get(&self, name: &str) -> Option<OptionValue<'_>> {
        match name {
            "hour" => self.hour.map(OptionValue::Int),
            "minute" => self.minute.map(OptionValue::Int),
            "second" => self.second.map(OptionValue::Int),
            "timezone" => self.timezone.as_deref().map(OptionValue::Str),
            "username" => self.username.as_deref().map(OptionValue::Str),
            "day" => self.day.as_deref().map(OptionValue::Str),
            "verbosity" => self.verbosity.as_deref().map(OptionValue::Str),
            _ => None,
        }
    }
}
