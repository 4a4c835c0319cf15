//! Init command implementation

use blocksync_core::SyncManifest;
use colored::Colorize;
use tracing::info;

use crate::context::AppContext;
use crate::error::{CliError, Result};

/// Write the built-in manifest to the configuration path.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn run_init(ctx: &AppContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        return Err(CliError::user(format!(
            "{path} already exists. Use --force to overwrite."
        )));
    }

    SyncManifest::default().save(&path)?;
    info!(path = %path, "wrote manifest");
    println!("{} Wrote {}", "OK".green().bold(), path.to_string().cyan());
    Ok(())
}
