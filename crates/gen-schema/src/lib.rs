//! Option schema for the Primer module generator.
//!
//! Declares what a generator run can be told: for each named option, a
//! positional-argument facet, a command-flag facet, and an interactive
//! prompt facet, in a fixed declaration order. Also home to the
//! validation rules applied to prompt answers and the builtin option
//! table for Primer CSS modules.

pub mod error;
pub mod option;
pub mod primer;
pub mod probe;
pub mod registry;
pub mod resolved;
pub mod rules;
pub mod value;

pub use error::{Error, Result};
pub use option::{
    ArgumentSpec, DefaultValue, DeriveFn, FlagSpec, OptionSpec, PromptKind, PromptSpec, ValueKind,
};
pub use primer::{primer_options, DocsPathRule, ModuleNameRule, META_PACKAGES, MODULE_TYPES};
pub use probe::PathProbe;
pub use registry::SchemaRegistry;
pub use resolved::ResolvedValues;
pub use rules::{RuleContext, ValueRule, Verdict};
pub use value::OptionValue;
