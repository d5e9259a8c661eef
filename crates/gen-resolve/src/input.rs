//! Raw command-line input, decoupled from any argument parser.
//!
//! The CLI layer parses `argv` however it likes and hands the result
//! over in this shape. Flag keys are stored under the exact spelling
//! the user typed (minus leading dashes); the resolver probes canonical
//! and aliased spellings itself.

use std::collections::HashMap;

/// A flag value as it came off the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawFlag {
    /// Presence-style boolean flag.
    Bool(bool),
    /// Flag with a text payload.
    Text(String),
}

/// Positional arguments and flags for one invocation.
#[derive(Debug, Clone, Default)]
pub struct CliValues {
    positionals: Vec<String>,
    flags: HashMap<String, RawFlag>,
}

impl CliValues {
    /// No arguments, no flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn with_positional(mut self, value: &str) -> Self {
        self.positionals.push(value.to_string());
        self
    }

    /// Sets a text flag under the given spelling (no leading dashes).
    pub fn with_flag(mut self, spelling: &str, value: &str) -> Self {
        self.flags
            .insert(spelling.to_string(), RawFlag::Text(value.to_string()));
        self
    }

    /// Sets a boolean flag under the given spelling (no leading dashes).
    ///
    /// Negated spellings are recorded as supplied too: `--no-todo`
    /// arrives as `with_bool_flag("no-todo", true)`.
    pub fn with_bool_flag(mut self, spelling: &str, value: bool) -> Self {
        self.flags
            .insert(spelling.to_string(), RawFlag::Bool(value));
        self
    }

    /// The positional at `index`, if supplied.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    /// The flag stored under exactly this spelling.
    pub fn flag(&self, spelling: &str) -> Option<&RawFlag> {
        self.flags.get(spelling)
    }
}
