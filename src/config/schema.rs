//! Configuration schema for dagcache
//!
//! Configuration is stored at `~/.config/dagcache/config.toml`

use crate::cache::memo::Revision;
use crate::cache::path::DEFAULT_PATH_CAPACITY;
use crate::cache::validator::{MemoSettings, DEFAULT_MEMO_NAME};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Cache settings
    pub cache: CacheConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Cache directory and memo settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory (defaults to `~/.ethash`)
    pub dir: Option<PathBuf>,

    /// Dataset format revision recorded in the memo
    pub revision: u32,

    /// Memo file name inside the cache directory
    pub memo_name: String,

    /// Maximum memo path length in bytes, terminator included
    pub path_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: None,
            revision: Revision::CURRENT.0,
            memo_name: DEFAULT_MEMO_NAME.to_string(),
            path_capacity: DEFAULT_PATH_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Validator settings described by this table
    pub fn memo_settings(&self) -> MemoSettings {
        MemoSettings {
            revision: Revision(self.revision),
            memo_name: self.memo_name.clone(),
            path_capacity: self.path_capacity,
        }
    }
}
