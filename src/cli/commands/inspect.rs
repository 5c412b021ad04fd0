//! Inspect command - show the memo in a cache directory

use super::resolve_target;
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::config::Config;
use crate::error::DagCacheResult;
use console::style;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct MemoJson {
    path: PathBuf,
    present: bool,
    revision: Option<u32>,
    seed: Option<String>,
    current_revision: bool,
}

/// Execute the inspect command
pub fn execute(args: InspectArgs, config: &Config) -> DagCacheResult<()> {
    let (dir, validator) = resolve_target(&args.target, config)?;
    let path = validator.memo_path(&dir)?;
    let record = validator.read_memo(&dir)?;

    let memo = MemoJson {
        path,
        present: record.is_some(),
        revision: record.map(|r| r.revision().0),
        seed: record.map(|r| r.seed_hash().to_string()),
        current_revision: record.is_some_and(|r| r.revision() == validator.settings().revision),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&memo)?),
        OutputFormat::Table => print_memo_table(&memo),
    }
    Ok(())
}

fn print_memo_table(memo: &MemoJson) {
    println!("{:<10} {}", "MEMO", memo.path.display());

    let (Some(revision), Some(seed)) = (memo.revision, memo.seed.as_deref()) else {
        println!("{:<10} {}", "STATE", style("absent").dim());
        return;
    };

    let revision = if memo.current_revision {
        style(revision.to_string()).green()
    } else {
        style(format!("{} (outdated)", revision)).yellow()
    };
    println!("{:<10} {}", "REVISION", revision);
    println!("{:<10} {}", "SEED", seed);
}
