//! blocksync CLI
//!
//! Copies a delimited markup block from a source file into a target file.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::RunStatus;
use context::AppContext;
use error::Result;

fn main() {
    match run() {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<RunStatus> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let ctx = AppContext::new(cli.root, cli.config);
    execute_command(&ctx, cli.command.unwrap_or_default())
}

fn execute_command(ctx: &AppContext, command: Commands) -> Result<RunStatus> {
    match command {
        Commands::Sync { job, dry_run, json } => {
            commands::run_sync(ctx, job.as_deref(), dry_run, json)
        }
        Commands::Diff { job } => commands::run_diff(ctx, job.as_deref()),
        Commands::List { json } => commands::run_list(ctx, json).map(|()| RunStatus::Success),
        Commands::Init { force } => commands::run_init(ctx, force).map(|()| RunStatus::Success),
    }
}
