//! Validation outcome and rule contract for prompt answers.

use crate::error::{Error, Result};
use crate::probe::PathProbe;
use crate::resolved::ResolvedValues;
use crate::value::OptionValue;
use async_trait::async_trait;
use std::path::Path;

/// Tagged outcome of validating a candidate value.
///
/// A rejection carries the message shown to the user before the same
/// prompt is re-presented. Rule failures (collaborator faults) are not
/// verdicts; they surface as `Err` from [`ValueRule::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The candidate is acceptable.
    Accept,
    /// The candidate is not acceptable; re-prompt with this message.
    Reject { message: String },
}

impl Verdict {
    /// Build a rejection with the given message.
    pub fn reject(message: impl Into<String>) -> Self {
        Self::Reject {
            message: message.into(),
        }
    }

    /// Whether this verdict accepts the candidate.
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Context handed to a rule when it runs.
///
/// Everything a rule may consult arrives here as an explicit parameter:
/// the mapping of names resolved before this prompt, the filesystem
/// probe, and the invocation working directory. No ambient or global
/// state is reachable from a rule.
pub struct RuleContext<'a> {
    /// Values resolved so far in this run.
    pub resolved: &'a ResolvedValues,
    /// Filesystem existence collaborator.
    pub paths: &'a dyn PathProbe,
    /// Working directory of the invocation (used in messages).
    pub cwd: &'a Path,
}

impl RuleContext<'_> {
    /// Asks the probe whether `path` exists, wrapping probe failures in
    /// [`Error::Probe`] so they stay distinguishable from rejections.
    pub async fn probe(&self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        self.paths
            .exists(path)
            .await
            .map_err(|source| Error::Probe {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Validation rule applied to a prompt answer.
///
/// One contract covers synchronous rules (pure string checks) and
/// asynchronous ones (filesystem probes); synchronous rules simply never
/// await.
#[async_trait]
pub trait ValueRule: Send + Sync {
    /// Check a candidate answer against this rule.
    async fn check(&self, candidate: &OptionValue, ctx: &RuleContext<'_>) -> Result<Verdict>;
}
