//! Error types for gen-schema

use std::path::PathBuf;

/// Result type for schema rule evaluation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating schema rules
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A filesystem probe failed outright while a rule was running.
    ///
    /// Distinct from a rule rejecting a candidate: a probe failure is a
    /// collaborator fault and aborts the whole resolution run.
    #[error("Existence check failed for {path}: {source}")]
    Probe {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
