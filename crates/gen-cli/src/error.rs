//! Error types for gen-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from option resolution
    #[error(transparent)]
    Resolve(#[from] gen_resolve::ResolveError),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
