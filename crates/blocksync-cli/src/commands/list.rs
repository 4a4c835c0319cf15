//! List command implementation

use blocksync_core::SyncJob;
use colored::Colorize;

use crate::context::AppContext;
use crate::error::Result;

/// Print the configured jobs.
pub fn run_list(ctx: &AppContext, json: bool) -> Result<()> {
    let manifest = ctx.load_manifest()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&manifest.jobs)?);
        return Ok(());
    }

    println!(
        "{} {} job(s) from {}",
        "=>".blue().bold(),
        manifest.jobs.len(),
        ctx.config_path().to_string().cyan()
    );
    for job in &manifest.jobs {
        print!("{}", render_job(job));
    }
    Ok(())
}

fn render_job(job: &SyncJob) -> String {
    let mut out = format!(
        "   {} {}: {} -> {}\n",
        "-".green(),
        job.name.bold(),
        job.source,
        job.target
    );
    let target_start = job.target_start.as_deref().unwrap_or(&job.source_start);
    out.push_str(&format!(
        "     from {:?} / {:?} to {:?}\n",
        job.source_start, target_start, job.end
    ));
    out
}
