//! Invocation context
//!
//! Resolves the working root and configuration file from the global flags.

use std::path::PathBuf;

use blocksync_core::{DEFAULT_CONFIG_FILE, SyncEngine, SyncManifest};
use blocksync_fs::NormalizedPath;
use tracing::debug;

use crate::error::Result;

/// Root directory and configuration source for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    root: PathBuf,
    config: Option<PathBuf>,
}

impl AppContext {
    pub fn new(root: impl Into<PathBuf>, config: Option<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// The explicit `--config` path, or `blocksync.toml` under the root.
    pub fn config_path(&self) -> NormalizedPath {
        match &self.config {
            Some(path) => NormalizedPath::new(path),
            None => NormalizedPath::new(&self.root).join(DEFAULT_CONFIG_FILE),
        }
    }

    /// Load the manifest.
    ///
    /// An explicit `--config` must exist; the default location falls back to
    /// the built-in jobs when absent.
    pub fn load_manifest(&self) -> Result<SyncManifest> {
        let path = self.config_path();
        debug!(config = %path, explicit = self.config.is_some(), "resolving manifest");
        let manifest = if self.config.is_some() {
            SyncManifest::load(&path)?
        } else {
            SyncManifest::load_or_default(&path)?
        };
        Ok(manifest)
    }

    pub fn engine(&self) -> SyncEngine {
        SyncEngine::new(self.root.as_path())
    }
}
