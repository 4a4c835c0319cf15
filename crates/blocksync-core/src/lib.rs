//! Job configuration and sync orchestration for blocksync
//!
//! This crate ties the filesystem layer and the block operations together:
//!
//! - **Jobs**: a [`SyncJob`] names a source and target document and the
//!   markers bounding the block to copy between them
//! - **Manifest**: a [`SyncManifest`] is the `[[jobs]]` configuration file
//! - **SyncEngine**: runs a job and returns a structured [`SyncReport`]
//!
//! ```text
//!              CLI
//!               |
//!         blocksync-core
//!          /          \
//! blocksync-fs   blocksync-blocks
//! ```
//!
//! # Example
//!
//! ```no_run
//! use blocksync_core::{SyncEngine, SyncJob, SyncOptions};
//!
//! let engine = SyncEngine::new(".");
//! let report = engine
//!     .run(&SyncJob::vehicle_form(), &SyncOptions::default())
//!     .unwrap();
//! println!("{:?}", report.outcome);
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod sync;

pub use config::{DEFAULT_CONFIG_FILE, SyncJob, SyncManifest};
pub use diff::TextDiffSummary;
pub use error::{Error, Result};
pub use sync::{Change, LineSpan, Outcome, SyncEngine, SyncOptions, SyncReport};
