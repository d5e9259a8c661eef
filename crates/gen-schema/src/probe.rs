//! Filesystem existence collaborator.

use async_trait::async_trait;
use std::path::Path;

/// Async existence check over a path.
///
/// The one schema rule that touches the filesystem goes through this
/// trait, so the real check (`tokio::fs` in the CLI) can be swapped for
/// a canned one in tests. An `Err` from the probe is a collaborator
/// fault, not a validation rejection: the caller treats it as fatal.
#[async_trait]
pub trait PathProbe: Send + Sync {
    /// Whether `path` exists.
    async fn exists(&self, path: &Path) -> std::io::Result<bool>;
}
