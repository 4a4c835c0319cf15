//! Command implementations for blocksync-cli

pub mod diff;
pub mod init;
pub mod list;
pub mod sync;

pub use diff::run_diff;
pub use init::run_init;
pub use list::run_list;
pub use sync::run_sync;

use blocksync_core::SyncReport;

/// How a command finished, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// At least one job found no matching block in its target.
    TargetBlockMissing,
}

impl RunStatus {
    pub fn from_reports(reports: &[SyncReport]) -> Self {
        if reports.iter().all(|report| report.outcome.is_success()) {
            Self::Success
        } else {
            Self::TargetBlockMissing
        }
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::TargetBlockMissing => 2,
        }
    }
}
