//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// blocksync - Copy a labeled markup block from one document into another
///
/// Without a command, runs `sync` for every configured job. When no
/// blocksync.toml exists, the built-in vehicle-form job copies the admin
/// dashboard's vehicle creation form onto the agent dashboard.
#[derive(Parser, Debug)]
#[command(name = "blocksync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base directory for relative job paths and the default config
    #[arg(short = 'C', long, global = true, default_value = ".", env = "BLOCKSYNC_ROOT")]
    pub root: PathBuf,

    /// Configuration file (defaults to blocksync.toml under the root)
    #[arg(short, long, global = true, env = "BLOCKSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy each job's source block into its target
    Sync {
        /// Run only the named job
        #[arg(short, long)]
        job: Option<String>,

        /// Preview changes without writing the target
        #[arg(long)]
        dry_run: bool,

        /// Output reports as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the diff a sync would apply
    Diff {
        /// Run only the named job
        #[arg(short, long)]
        job: Option<String>,
    },

    /// List configured jobs
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Write a configuration file holding the built-in job
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Sync {
            job: None,
            dry_run: false,
            json: false,
        }
    }
}
