//! Canned filesystem existence checkers.

use async_trait::async_trait;
use gen_schema::PathProbe;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Probe answering from a fixed set of existing paths.
#[derive(Debug, Default)]
pub struct StaticProbe {
    existing: HashSet<PathBuf>,
}

impl StaticProbe {
    /// A probe where no path exists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a path as existing.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.existing.insert(path.into());
        self
    }
}

#[async_trait]
impl PathProbe for StaticProbe {
    async fn exists(&self, path: &Path) -> std::io::Result<bool> {
        Ok(self.existing.contains(path))
    }
}

/// Probe that always fails, for exercising collaborator-fault paths.
#[derive(Debug, Default)]
pub struct FailingProbe;

#[async_trait]
impl PathProbe for FailingProbe {
    async fn exists(&self, _path: &Path) -> std::io::Result<bool> {
        Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "probe failed",
        ))
    }
}
