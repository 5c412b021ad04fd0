//! On-disk DAG cache validation
//!
//! A cache directory holds a large generated dataset (the DAG payload) and a
//! small memo file naming the format revision and epoch seed hash it was
//! generated for. Checking the memo is constant time; regenerating the DAG
//! takes minutes.
//!
//! # Outcomes
//!
//! | Outcome | Memo on disk | Caller action |
//! |---------|--------------|---------------|
//! | Match | equal to expected | reuse the DAG |
//! | Mismatch | absent, or stale and now removed | regenerate, then write memo |
//! | Fail | unchanged | report or retry |
//!
//! No locking is done. Processes sharing a directory must coordinate
//! validation and regeneration themselves.

pub mod dir;
pub mod memo;
pub mod path;
pub mod validator;

pub use dir::{ensure_dir, DirStatus};
pub use memo::{MemoRecord, Revision, SeedHash, MEMO_BYTESIZE};
pub use path::{memo_path, BoundedPath};
pub use validator::{CacheOutcome, CacheValidator, MemoSettings, MemoStatus};
