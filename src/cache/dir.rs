//! Cache directory creation

use crate::error::{DagCacheError, DagCacheResult};
use std::fs::DirBuilder;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Mode requested for a new cache directory (rwxrwxr-x)
pub const CACHE_DIR_MODE: u32 = 0o775;

/// Whether `ensure_dir` had to create the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    Existing,
}

/// Create the leaf cache directory, treating "already exists" as success
///
/// Missing parents are not created.
pub fn ensure_dir(path: &Path) -> DagCacheResult<DirStatus> {
    let mut builder = DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(CACHE_DIR_MODE);
    }

    match builder.create(path) {
        Ok(()) => {
            debug!("Created cache directory {}", path.display());
            Ok(DirStatus::Created)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(DirStatus::Existing),
        Err(e) => Err(DagCacheError::DirCreate {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
