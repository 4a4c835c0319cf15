//! Diff command implementation
//!
//! Previews what `sync` would change, as a unified diff per job.

use blocksync_core::{Outcome, SyncOptions};
use colored::Colorize;

use super::RunStatus;
use super::sync::{print_banner, render_report};
use crate::context::AppContext;
use crate::error::Result;

/// Run the diff command
///
/// Never writes; every job runs in dry-run mode.
pub fn run_diff(ctx: &AppContext, job: Option<&str>) -> Result<RunStatus> {
    let manifest = ctx.load_manifest()?;
    let jobs = manifest.select(job)?;
    let reports = ctx
        .engine()
        .run_jobs(jobs.iter().copied(), &SyncOptions { dry_run: true })?;

    for (job, report) in jobs.iter().zip(&reports) {
        print_banner(job);
        match report.outcome {
            Outcome::WouldUpdate => {
                for line in report.diff.unified.lines() {
                    println!("{}", colorize_diff_line(line));
                }
                println!(
                    "{} {} insertion(s), {} deletion(s)",
                    "=>".blue().bold(),
                    report.diff.inserted,
                    report.diff.deleted
                );
            }
            _ => print!("{}", render_report(report)),
        }
    }

    Ok(RunStatus::from_reports(&reports))
}

fn colorize_diff_line(line: &str) -> String {
    if line.starts_with("+++") || line.starts_with("---") {
        line.bold().to_string()
    } else if line.starts_with('+') {
        line.green().to_string()
    } else if line.starts_with('-') {
        line.red().to_string()
    } else if line.starts_with("@@") {
        line.cyan().to_string()
    } else {
        line.to_string()
    }
}
