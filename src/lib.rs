//! dagcache - DAG cache preparation for proof-of-work epochs
//!
//! Ensures a cache directory exists and decides, from a small memo file,
//! whether the dataset stored there can be reused for an epoch.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;

pub use cache::{CacheOutcome, CacheValidator, MemoSettings, SeedHash};
pub use error::{DagCacheError, DagCacheResult};
