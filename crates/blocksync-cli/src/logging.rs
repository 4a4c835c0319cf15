//! Tracing setup for `--verbose`

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{CliError, Result};

/// Install a stderr subscriber at DEBUG level, refined by `RUST_LOG`.
///
/// Logging stays off unless `verbose` is set, so stdout carries only the
/// command's own output.
pub fn init(verbose: bool) -> Result<()> {
    if !verbose {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::Logging(e.to_string()))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}
