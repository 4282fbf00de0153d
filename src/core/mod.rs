//! Core functionality for command validation
//!
//! Contains the option record, the per-subcommand rule tables, and the
//! validator that applies them.

pub mod options;
pub mod rules;
pub mod validator;

pub use options::{OptionValue, ParsedOptions, Subcommand};
pub use rules::{Constraint, FieldRule, RuleSet};
pub use validator::CommandValidator;
