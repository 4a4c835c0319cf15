//! Error types for blocksync-core

use std::path::PathBuf;

/// Result type for blocksync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in blocksync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source document has no block bounded by the job's markers.
    #[error("Could not find the '{job}' block in {path}")]
    SourceBlockMissing { job: String, path: PathBuf },

    /// A job definition is unusable
    #[error("Invalid job '{job}': {reason}")]
    InvalidJob { job: String, reason: String },

    /// The manifest declares no jobs
    #[error("No jobs configured")]
    NoJobs,

    /// A job name was requested that the manifest does not declare
    #[error("Unknown job: {name}")]
    UnknownJob { name: String },

    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Filesystem error from blocksync-fs
    #[error(transparent)]
    Fs(#[from] blocksync_fs::Error),

    /// Block error from blocksync-blocks
    #[error(transparent)]
    Blocks(#[from] blocksync_blocks::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    pub fn invalid_job(job: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidJob {
            job: job.into(),
            reason: reason.into(),
        }
    }
}
