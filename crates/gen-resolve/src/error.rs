//! Error types for gen-resolve

/// Result type for resolution operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that abort a resolution run.
///
/// A validation rejection is not represented here: rejections re-present
/// the prompt locally and never abort the run. Nor is a flag value of
/// mismatched shape: the resolver ignores it, as if the flag were never
/// supplied.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// A required positional argument was not supplied. Raised before
    /// any prompting happens.
    #[error("Missing required argument: {name}")]
    MissingArgument { name: String },

    /// A prompt default pointed past the end of the choice list.
    #[error("Default choice index {index} out of range for {name} ({len} choices)")]
    DefaultIndexOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },

    /// The prompt engine failed to deliver an answer.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// A validation rule failed outright (collaborator fault).
    #[error(transparent)]
    Rule(#[from] gen_schema::Error),
}

/// Failure inside a prompt engine (terminal gone, script exhausted).
#[derive(Debug, thiserror::Error)]
#[error("Prompt failed: {message}")]
pub struct PromptError {
    message: String,
}

impl PromptError {
    /// Build a prompt failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
