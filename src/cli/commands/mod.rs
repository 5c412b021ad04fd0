//! CLI command implementations

pub mod check;
pub mod config;
pub mod inspect;
pub mod write;

pub use check::execute as check;
pub use config::execute as config;
pub use inspect::execute as inspect;
pub use write::execute as write;

use crate::cache::{CacheValidator, Revision};
use crate::cli::args::CacheTarget;
use crate::config::{Config, ConfigManager};
use crate::error::DagCacheResult;
use std::path::PathBuf;
use tracing::debug;

/// Resolve the cache directory and validator for a memo command
fn resolve_target(
    target: &CacheTarget,
    config: &Config,
) -> DagCacheResult<(PathBuf, CacheValidator)> {
    let dir = ConfigManager::resolve_cache_dir(target.dir.clone(), &config.cache)?;

    let mut settings = config.cache.memo_settings();
    if let Some(revision) = target.revision {
        settings.revision = Revision(revision);
    }

    debug!(
        "Cache dir {}, revision {}, memo {}",
        dir.display(),
        settings.revision,
        settings.memo_name
    );
    Ok((dir, CacheValidator::new(settings)))
}
