//! Filesystem layer for blocksync
//!
//! Provides normalized path handling, UTF-8 text reads, atomic text writes,
//! content checksums, and format-agnostic configuration loading.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use checksum::compute_content_checksum;
pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
