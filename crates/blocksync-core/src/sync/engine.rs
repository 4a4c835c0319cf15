//! SyncEngine implementation
//!
//! Runs a job as one linear pass: load source, extract the block (fail fast),
//! relabel it, load target, substitute, persist, report.

use blocksync_blocks::{Substitution, extract_block, relabel_block, substitute_block};
use blocksync_fs::{NormalizedPath, compute_content_checksum, io};
use tracing::{debug, info, warn};

use super::report::{Change, LineSpan, Outcome, SyncReport};
use crate::config::{SyncJob, SyncManifest};
use crate::diff::TextDiffSummary;
use crate::{Error, Result};

/// Options for sync operations
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, compute the result without writing the target.
    pub dry_run: bool,
}

/// Engine for copying blocks between documents under a common root
pub struct SyncEngine {
    /// Base directory for relative job paths
    root: NormalizedPath,
}

impl SyncEngine {
    /// Create a new SyncEngine resolving job paths against `root`.
    pub fn new(root: impl Into<NormalizedPath>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a job path against the engine root.
    pub fn resolve(&self, path: &str) -> NormalizedPath {
        self.root.join(path)
    }

    /// Run a single job.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceBlockMissing`] when the source has no matching
    /// block; the target is not read or written in that case. I/O failures
    /// and invalid jobs are also errors. A target without a matching block is
    /// not an error: it yields [`Outcome::TargetBlockMissing`].
    pub fn run(&self, job: &SyncJob, options: &SyncOptions) -> Result<SyncReport> {
        job.validate()?;

        let source_path = self.resolve(&job.source);
        let target_path = self.resolve(&job.target);
        info!(
            job = %job.name,
            source = %source_path,
            target = %target_path,
            dry_run = options.dry_run,
            "running sync job"
        );

        let source = io::read_text(&source_path)?;
        let block = match extract_block(&source, &job.source_markers()) {
            Ok(block) => block,
            Err(blocksync_blocks::Error::BlockNotFound { .. }) => {
                warn!(job = %job.name, source = %source_path, "source block not found");
                return Err(Error::SourceBlockMissing {
                    job: job.name.clone(),
                    path: source_path.to_native(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        debug!(
            start_line = block.start_line,
            end_line = block.end_line,
            "extracted source block"
        );

        let replacement = match &job.label {
            Some(label) => relabel_block(&block.text, label),
            None => block.text.clone(),
        };

        let target = io::read_text(&target_path)?;
        let checksum_before = compute_content_checksum(&target);

        let mut report = SyncReport {
            job: job.name.clone(),
            source: source_path.to_string(),
            target: target_path.to_string(),
            outcome: Outcome::Unchanged,
            changes: Vec::new(),
            diff: TextDiffSummary::unchanged(),
            checksum_before: checksum_before.clone(),
            checksum_after: checksum_before,
            next_step: job.next_step.clone(),
        };

        let (updated, replaced) =
            match substitute_block(&target, &job.target_markers(), &replacement)? {
                Substitution::Replaced { document, replaced } => (document, replaced),
                Substitution::NoMatch { .. } => {
                    warn!(job = %job.name, target = %target_path, "target block not found");
                    report.outcome = Outcome::TargetBlockMissing;
                    return Ok(report);
                }
            };

        if updated == target {
            info!(job = %job.name, "target already up to date");
            return Ok(report);
        }

        report.diff = TextDiffSummary::compute(
            &target,
            &updated,
            target_path.as_str(),
            target_path.as_str(),
        );
        report.changes.push(Change::ReplacedBlock {
            source: LineSpan {
                start: block.start_line,
                end: block.end_line,
            },
            target: LineSpan {
                start: replaced.start_line,
                end: replaced.end_line,
            },
        });
        if let Some(label) = job.label.as_ref().filter(|_| replacement != block.text) {
            report.changes.push(Change::Relabeled {
                from: label.from.clone(),
                to: label.to.clone(),
            });
        }
        report.changes.extend(
            job.notes
                .iter()
                .map(|text| Change::Note { text: text.clone() }),
        );

        if options.dry_run {
            report.outcome = Outcome::WouldUpdate;
            info!(job = %job.name, outcome = %report.outcome, "dry run, target not written");
            return Ok(report);
        }

        io::write_text(&target_path, &updated)?;
        report.checksum_after = compute_content_checksum(&updated);
        report.outcome = Outcome::Updated;
        info!(
            job = %job.name,
            outcome = %report.outcome,
            inserted = report.diff.inserted,
            deleted = report.diff.deleted,
            "target updated"
        );
        Ok(report)
    }

    /// Run every job of `manifest` in order.
    ///
    /// Stops at the first error; reports of jobs that already ran are lost
    /// with it, but their writes stay on disk.
    pub fn run_all(
        &self,
        manifest: &SyncManifest,
        options: &SyncOptions,
    ) -> Result<Vec<SyncReport>> {
        self.run_jobs(manifest.jobs.iter(), options)
    }

    /// Run the given jobs in order, stopping at the first error.
    pub fn run_jobs<'a>(
        &self,
        jobs: impl IntoIterator<Item = &'a SyncJob>,
        options: &SyncOptions,
    ) -> Result<Vec<SyncReport>> {
        jobs.into_iter().map(|job| self.run(job, options)).collect()
    }
}
