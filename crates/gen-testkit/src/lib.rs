//! Test doubles shared across the workspace's test suites.
//!
//! Resolution has two collaborator seams, the prompt engine and the
//! filesystem probe, and every integration test needs a controllable
//! stand-in for both. [`ScriptedPrompts`] answers prompts from a queue
//! and records everything it was asked; the probes in [`probes`] answer
//! existence checks from a fixed set or fail on purpose. Dev-dependency
//! only, never published.

pub mod probes;
pub mod prompts;

pub use probes::{FailingProbe, StaticProbe};
pub use prompts::{PromptRecord, ScriptedPrompts};
