//! Manifest parsing for blocksync.toml files

use std::collections::HashSet;

use blocksync_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SyncJob;
use crate::{Error, Result};

/// Conventional configuration file name, looked up under the working root.
pub const DEFAULT_CONFIG_FILE: &str = "blocksync.toml";

/// The set of jobs a blocksync run executes, in order.
///
/// The default manifest holds only [`SyncJob::vehicle_form`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncManifest {
    #[serde(default)]
    pub jobs: Vec<SyncJob>,
}

impl Default for SyncManifest {
    fn default() -> Self {
        Self {
            jobs: vec![SyncJob::vehicle_form()],
        }
    }
}

impl SyncManifest {
    /// Parse a manifest from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use blocksync_core::SyncManifest;
    ///
    /// let manifest = SyncManifest::parse(r#"
    /// [[jobs]]
    /// name = "footer"
    /// source = "site/a.html"
    /// target = "site/b.html"
    /// source_start = "<!-- footer -->"
    /// end = "</footer>"
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.jobs[0].name, "footer");
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: SyncManifest = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load and validate a manifest; the format follows the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_native(),
            });
        }
        let manifest: SyncManifest = ConfigStore::new().load(path)?;
        manifest.validate()?;
        debug!(path = %path, jobs = manifest.jobs.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Load `path` if it exists, otherwise fall back to the default manifest.
    pub fn load_or_default(path: &NormalizedPath) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            debug!(path = %path, "no manifest found, using built-in jobs");
            Ok(Self::default())
        }
    }

    /// Write the manifest; the format follows the file extension.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        ConfigStore::new().save(path, self)?;
        Ok(())
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every job and reject duplicate names.
    pub fn validate(&self) -> Result<()> {
        if self.jobs.is_empty() {
            return Err(Error::NoJobs);
        }
        let mut seen = HashSet::new();
        for job in &self.jobs {
            job.validate()?;
            if !seen.insert(job.name.as_str()) {
                return Err(Error::invalid_job(&job.name, "duplicate job name"));
            }
        }
        Ok(())
    }

    /// Look up a job by name.
    pub fn job(&self, name: &str) -> Option<&SyncJob> {
        self.jobs.iter().find(|job| job.name == name)
    }

    /// The jobs to run: the named one, or all of them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownJob`] if `name` is not declared.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<&SyncJob>> {
        match name {
            Some(name) => self
                .job(name)
                .map(|job| vec![job])
                .ok_or_else(|| Error::UnknownJob {
                    name: name.to_string(),
                }),
            None => Ok(self.jobs.iter().collect()),
        }
    }
}
