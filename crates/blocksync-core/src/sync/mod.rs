//! Block synchronization
//!
//! The [`SyncEngine`] runs [`SyncJob`](crate::SyncJob)s and returns a
//! [`SyncReport`] per job.

mod engine;
mod report;

pub use engine::{SyncEngine, SyncOptions};
pub use report::{Change, LineSpan, Outcome, SyncReport};
