//! Memo validation for a DAG cache directory
//!
//! Decides whether the dataset in a cache directory can be reused for an
//! epoch. A memo that does not match the caller's revision and seed hash is
//! deleted so later readers treat the slot as empty; the payload itself is
//! left for the generator to overwrite.

use crate::cache::dir::{ensure_dir, DirStatus};
use crate::cache::memo::{MemoRecord, Revision, SeedHash, MEMO_BYTESIZE};
use crate::cache::path::{memo_path, DEFAULT_PATH_CAPACITY};
use crate::error::{DagCacheError, DagCacheResult};
use serde::Serialize;
use std::fmt;
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default memo file name inside the cache directory
pub const DEFAULT_MEMO_NAME: &str = "full.info";

/// Values the validator compares and builds paths with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoSettings {
    pub revision: Revision,
    pub memo_name: String,
    pub path_capacity: usize,
}

impl Default for MemoSettings {
    fn default() -> Self {
        Self {
            revision: Revision::CURRENT,
            memo_name: DEFAULT_MEMO_NAME.to_string(),
            path_capacity: DEFAULT_PATH_CAPACITY,
        }
    }
}

/// Result of a successful validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoStatus {
    /// Memo matches; the cached DAG can be reused
    Match,
    /// No usable memo; the DAG must be regenerated
    Mismatch,
}

/// Three-way outcome reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheOutcome {
    Fail,
    Mismatch,
    Match,
}

impl From<MemoStatus> for CacheOutcome {
    fn from(status: MemoStatus) -> Self {
        match status {
            MemoStatus::Match => Self::Match,
            MemoStatus::Mismatch => Self::Mismatch,
        }
    }
}

impl fmt::Display for CacheOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::Mismatch => write!(f, "mismatch"),
            Self::Match => write!(f, "match"),
        }
    }
}

/// Checks and writes memo records in cache directories
#[derive(Debug, Clone, Default)]
pub struct CacheValidator {
    settings: MemoSettings,
}

impl CacheValidator {
    pub fn new(settings: MemoSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &MemoSettings {
        &self.settings
    }

    /// Full path of the memo file for `dir`
    pub fn memo_path(&self, dir: &Path) -> DagCacheResult<PathBuf> {
        memo_path(dir, &self.settings.memo_name, self.settings.path_capacity)
    }

    /// Record the current settings expect for `seed_hash`
    pub fn expected(&self, seed_hash: &SeedHash) -> MemoRecord {
        MemoRecord::serialize(self.settings.revision, seed_hash)
    }

    /// Validate the cache in `dir`, collapsing any error into `CacheOutcome::Fail`
    pub fn validate(&self, dir: &Path, seed_hash: &SeedHash) -> CacheOutcome {
        match self.prepare(dir, seed_hash) {
            Ok(status) => status.into(),
            Err(e) => {
                warn!("Cache validation failed for {}: {}", dir.display(), e);
                CacheOutcome::Fail
            }
        }
    }

    /// Prepare `dir` and compare its memo with the expected record
    ///
    /// The memo path is built before the directory is touched, so an
    /// overlong path fails without side effects. A differing memo is removed
    /// and reported as `Mismatch`; a short one is an error and stays on disk.
    pub fn prepare(&self, dir: &Path, seed_hash: &SeedHash) -> DagCacheResult<MemoStatus> {
        let path = self.memo_path(dir)?;
        self.ensure_cache_dir(dir)?;

        let mut file = match File::open(&path) {
            Ok(f) => f,
            Err(e) => {
                if e.kind() == ErrorKind::NotFound {
                    debug!("No memo at {}", path.display());
                } else {
                    warn!("Could not open memo {}: {}", path.display(), e);
                }
                return Ok(MemoStatus::Mismatch);
            }
        };

        let found = read_record(&mut file, &path)?;
        drop(file);

        if found == self.expected(seed_hash) {
            debug!("Memo {} matches seed {}", path.display(), seed_hash);
            return Ok(MemoStatus::Match);
        }

        debug!(
            "Memo {} holds revision {} seed {}, removing",
            path.display(),
            found.revision(),
            found.seed_hash()
        );
        fs::remove_file(&path).map_err(|e| DagCacheError::MemoRemove {
            path: path.clone(),
            source: e,
        })?;
        Ok(MemoStatus::Mismatch)
    }

    /// Write the memo for `seed_hash` after the DAG has been regenerated
    pub fn write_memo(&self, dir: &Path, seed_hash: &SeedHash) -> DagCacheResult<PathBuf> {
        let path = self.memo_path(dir)?;
        self.ensure_cache_dir(dir)?;

        let record = self.expected(seed_hash);
        fs::write(&path, record.as_bytes()).map_err(|e| DagCacheError::MemoWrite {
            path: path.clone(),
            source: e,
        })?;

        info!(
            "Wrote memo {} (revision {}, seed {})",
            path.display(),
            self.settings.revision,
            seed_hash
        );
        Ok(path)
    }

    fn ensure_cache_dir(&self, dir: &Path) -> DagCacheResult<()> {
        match ensure_dir(dir)? {
            DirStatus::Created => debug!("Cache directory {} created", dir.display()),
            DirStatus::Existing => debug!("Cache directory {} already present", dir.display()),
        }
        Ok(())
    }

    /// Read the memo in `dir` without comparing or removing it
    pub fn read_memo(&self, dir: &Path) -> DagCacheResult<Option<MemoRecord>> {
        let path = self.memo_path(dir)?;
        let mut file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(DagCacheError::MemoRead { path, source: e }),
        };
        read_record(&mut file, &path).map(Some)
    }
}

/// Read exactly one record; trailing bytes are ignored
fn read_record(file: &mut File, path: &Path) -> DagCacheResult<MemoRecord> {
    let mut buf = [0u8; MEMO_BYTESIZE];
    file.read_exact(&mut buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            DagCacheError::MemoTruncated {
                path: path.to_path_buf(),
                expected: MEMO_BYTESIZE,
            }
        } else {
            DagCacheError::MemoRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(MemoRecord::from_bytes(buf))
}
