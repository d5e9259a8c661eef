//! Ordered registry of option specifications.
//!
//! Declaration order is load-bearing: the resolver walks options in the
//! order they were registered, so derived defaults may only read options
//! declared earlier. The registry therefore stores entries in a vector
//! rather than a map.

use crate::option::OptionSpec;
use crate::primer::primer_options;

/// Ordered collection of named option specs.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: Vec<(String, OptionSpec)>,
}

impl SchemaRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the Primer module options.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, spec) in primer_options() {
            registry.register(&name, spec);
        }
        registry
    }

    /// Registers a spec under `name`.
    ///
    /// Re-registering an existing name replaces the spec in place and
    /// keeps the original position.
    pub fn register(&mut self, name: &str, spec: OptionSpec) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = spec;
        } else {
            self.entries.push((name.to_string(), spec));
        }
    }

    /// Looks up a spec by name.
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// All entries, in declaration order.
    pub fn specs_in_order(&self) -> impl Iterator<Item = (&str, &OptionSpec)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// All registered names, in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of registered options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no options.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
