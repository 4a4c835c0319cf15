//! Job configuration
//!
//! - [`SyncJob`]: one source/target pair and the markers bounding its block
//! - [`SyncManifest`]: the `[[jobs]]` configuration file

mod job;
mod manifest;

pub use job::SyncJob;
pub use manifest::{DEFAULT_CONFIG_FILE, SyncManifest};
