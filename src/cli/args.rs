//! CLI argument definitions using clap derive

use crate::cache::SeedHash;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// dagcache - DAG cache preparation
///
/// Checks whether the DAG stored in a cache directory can be reused for
/// an epoch, and records which epoch a regenerated DAG belongs to.
#[derive(Parser, Debug)]
#[command(name = "dagcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DAGCACHE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate the memo in a cache directory against a seed hash
    Check(CheckArgs),

    /// Write the memo for a freshly generated DAG
    Write(WriteArgs),

    /// Show the memo in a cache directory without changing it
    Inspect(InspectArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Cache location and revision shared by memo commands
#[derive(Parser, Debug, Clone)]
pub struct CacheTarget {
    /// Cache directory (default: from config, then ~/.ethash)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Dataset format revision (default: from config)
    #[arg(long)]
    pub revision: Option<u32>,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Epoch seed hash, 64 hex characters
    #[arg(short, long, value_parser = parse_seed_hash)]
    pub seed: SeedHash,

    #[command(flatten)]
    pub target: CacheTarget,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the write command
#[derive(Parser, Debug)]
pub struct WriteArgs {
    /// Epoch seed hash, 64 hex characters
    #[arg(short, long, value_parser = parse_seed_hash)]
    pub seed: SeedHash,

    #[command(flatten)]
    pub target: CacheTarget,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub target: CacheTarget,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for reporting commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

fn parse_seed_hash(s: &str) -> Result<SeedHash, String> {
    s.parse().map_err(|e: crate::error::DagCacheError| e.to_string())
}
