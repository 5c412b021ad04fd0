//! Write command - record the epoch of a regenerated DAG

use super::resolve_target;
use crate::cli::args::WriteArgs;
use crate::config::Config;
use crate::error::DagCacheResult;
use console::style;

/// Execute the write command
pub fn execute(args: WriteArgs, config: &Config) -> DagCacheResult<()> {
    let (dir, validator) = resolve_target(&args.target, config)?;
    let path = validator.write_memo(&dir, &args.seed)?;

    println!(
        "{} wrote {} (revision {})",
        style("✓").green(),
        path.display(),
        validator.settings().revision
    );
    Ok(())
}
