//! Filesystem existence probe backed by tokio.

use async_trait::async_trait;
use gen_schema::PathProbe;
use std::path::Path;

/// Checks paths against the real filesystem.
pub struct FsProbe;

#[async_trait]
impl PathProbe for FsProbe {
    async fn exists(&self, path: &Path) -> std::io::Result<bool> {
        tokio::fs::try_exists(path).await
    }
}
