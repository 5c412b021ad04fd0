//! dagcache - DAG cache preparation
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use dagcache::cli::{Cli, Commands};
use dagcache::config::ConfigManager;
use dagcache::error::DagCacheResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> DagCacheResult<()> {
    let cli = Cli::parse();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load().await?;

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("dagcache=warn"),
        1 => EnvFilter::new("dagcache=info"),
        _ => EnvFilter::new("dagcache=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    if config.general.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match cli.command {
        Commands::Check(args) => dagcache::cli::commands::check(args, &config),
        Commands::Write(args) => dagcache::cli::commands::write(args, &config),
        Commands::Inspect(args) => dagcache::cli::commands::inspect(args, &config),
        Commands::Config(args) => {
            dagcache::cli::commands::config(args, &config, &config_manager).await
        }
    }
}
