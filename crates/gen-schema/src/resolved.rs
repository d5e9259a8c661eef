//! The per-run accumulator of resolved option values.

use crate::value::OptionValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option values resolved so far during a single resolution run.
///
/// Created fresh per invocation and grown monotonically: names are added
/// as they resolve and never removed. Derived defaults and validators
/// receive a shared reference to this mapping and may only read values
/// that resolved before them (earlier declaration order, or earlier
/// prompts in the same pass).
///
/// Keys are stored sorted so that reports and serialized output are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedValues {
    values: BTreeMap<String, OptionValue>,
}

impl ResolvedValues {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved value under an option name.
    ///
    /// The resolver writes each name at most once per run.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a resolved value.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Look up a resolved text value.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(OptionValue::as_text)
    }

    /// Look up a resolved boolean value.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(OptionValue::as_bool)
    }

    /// Look up a resolved list value.
    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(OptionValue::as_list)
    }

    /// Whether a name has resolved.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of resolved names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has resolved yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate resolved `(name, value)` pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
