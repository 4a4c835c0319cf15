//! Sync command implementation
//!
//! Runs the selected jobs and renders each [`SyncReport`] for the console.

use blocksync_core::{Outcome, SyncJob, SyncOptions, SyncReport};
use colored::Colorize;

use super::RunStatus;
use crate::context::AppContext;
use crate::error::Result;

/// Run the sync command
///
/// Errors (including a missing source block) abort before later jobs run.
/// With `json`, the reports of jobs that already ran are printed first.
pub fn run_sync(
    ctx: &AppContext,
    job: Option<&str>,
    dry_run: bool,
    json: bool,
) -> Result<RunStatus> {
    let manifest = ctx.load_manifest()?;
    let jobs = manifest.select(job)?;
    let engine = ctx.engine();
    let options = SyncOptions { dry_run };

    let mut reports = Vec::with_capacity(jobs.len());
    for job in jobs {
        if !json {
            print_banner(job);
        }
        let report = match engine.run(job, &options) {
            Ok(report) => report,
            Err(e) => {
                if json {
                    println!("{}", SyncReport::batch_to_json(&reports)?);
                }
                return Err(e.into());
            }
        };
        if !json {
            print!("{}", render_report(&report));
        }
        reports.push(report);
    }

    if json {
        println!("{}", SyncReport::batch_to_json(&reports)?);
    }

    Ok(RunStatus::from_reports(&reports))
}

pub(crate) fn print_banner(job: &SyncJob) {
    println!(
        "{} Updating {} from {}...",
        "=>".blue().bold(),
        job.target.cyan(),
        job.source.cyan()
    );
}

/// Render a report as console text, one line per entry.
pub fn render_report(report: &SyncReport) -> String {
    let mut out = String::new();
    match report.outcome {
        Outcome::Updated => {
            out.push_str(&format!(
                "{} Target updated successfully!\n",
                "OK".green().bold()
            ));
            out.push_str(&render_changes(report));
            if let Some(next) = &report.next_step {
                out.push_str(&format!("\n{} {}\n", "Next:".bold(), next));
            }
        }
        Outcome::WouldUpdate => {
            out.push_str(&format!(
                "{} Target would be updated (nothing written).\n",
                "DRY-RUN".yellow().bold()
            ));
            out.push_str(&render_changes(report));
        }
        Outcome::Unchanged => {
            out.push_str(&format!(
                "{} Already up to date. No changes needed.\n",
                "OK".green().bold()
            ));
        }
        Outcome::TargetBlockMissing => {
            out.push_str(&format!(
                "{} No matching block in {}. Nothing written.\n",
                "MISSING".yellow().bold(),
                report.target.cyan()
            ));
        }
    }
    out
}

fn render_changes(report: &SyncReport) -> String {
    let mut out = String::from("\nChanges made:\n");
    for change in &report.changes {
        out.push_str(&format!("   {} {}\n", "-".green(), change));
    }
    out
}
