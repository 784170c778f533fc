//! Run context shared across a build run.

use std::path::{Path, PathBuf};

/// Immutable execution parameters for one orchestrator run.
///
/// Constructed once at startup and passed by reference into every
/// component; there is no process-wide mutable state.
#[derive(Debug, Clone)]
pub struct RunContext {
    base_dir: PathBuf,
}

impl RunContext {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve a config-relative path against the base directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(path)
    }
}
