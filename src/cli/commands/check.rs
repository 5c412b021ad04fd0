//! Check command - validate a cache directory against a seed hash

use super::resolve_target;
use crate::cache::CacheOutcome;
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::Config;
use crate::error::DagCacheResult;
use console::style;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct CheckReport<'a> {
    dir: &'a Path,
    revision: u32,
    seed: String,
    outcome: CacheOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the check command
///
/// A stale memo is removed as a side effect. Fails only on `CacheOutcome::Fail`.
pub fn execute(args: CheckArgs, config: &Config) -> DagCacheResult<()> {
    let (dir, validator) = resolve_target(&args.target, config)?;

    let result = validator.prepare(&dir, &args.seed);
    let outcome = match &result {
        Ok(status) => CacheOutcome::from(*status),
        Err(_) => CacheOutcome::Fail,
    };

    let report = CheckReport {
        dir: &dir,
        revision: validator.settings().revision.0,
        seed: args.seed.to_string(),
        outcome,
        error: result.as_ref().err().map(ToString::to_string),
    };

    match args.format {
        OutputFormat::Table => print_report_table(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    result.map(|_| ())
}

fn print_report_table(report: &CheckReport<'_>) {
    let outcome = match report.outcome {
        CacheOutcome::Match => style("match").green(),
        CacheOutcome::Mismatch => style("mismatch").yellow(),
        CacheOutcome::Fail => style("fail").red(),
    };

    println!("{:<10} {}", "DIR", report.dir.display());
    println!("{:<10} {}", "REVISION", report.revision);
    println!("{:<10} {}", "SEED", report.seed);
    println!("{:<10} {}", "OUTCOME", outcome);

    if report.outcome == CacheOutcome::Mismatch {
        println!();
        println!("DAG must be regenerated before it can be used.");
    }
}
