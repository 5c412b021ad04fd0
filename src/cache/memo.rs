//! Memo record codec
//!
//! A memo is the fixed 36-byte sidecar recording which dataset a cache
//! directory holds: a 4-byte little-endian format revision followed by the
//! 32-byte epoch seed hash. Records are compared whole, never parsed field
//! by field.

use crate::error::{DagCacheError, DagCacheResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Size of a seed hash in bytes
pub const SEED_HASH_BYTESIZE: usize = 32;

/// Size of the encoded revision in bytes
pub const REVISION_BYTESIZE: usize = 4;

/// Total size of a memo record
pub const MEMO_BYTESIZE: usize = REVISION_BYTESIZE + SEED_HASH_BYTESIZE;

/// On-disk dataset format revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(pub u32);

impl Revision {
    /// Revision written by current DAG generators
    pub const CURRENT: Self = Self(23);

    pub fn to_le_bytes(self) -> [u8; REVISION_BYTESIZE] {
        self.0.to_le_bytes()
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Seed hash identifying an epoch
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeedHash(pub [u8; SEED_HASH_BYTESIZE]);

impl SeedHash {
    pub const fn new(bytes: [u8; SEED_HASH_BYTESIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_HASH_BYTESIZE] {
        &self.0
    }
}

impl fmt::Display for SeedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for SeedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeedHash({})", self)
    }
}

impl FromStr for SeedHash {
    type Err = DagCacheError;

    /// Parse 64 hex characters, with an optional `0x` prefix
    fn from_str(s: &str) -> DagCacheResult<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; SEED_HASH_BYTESIZE];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| DagCacheError::SeedHashInvalid(format!("{}: {}", s, e)))?;
        Ok(Self(bytes))
    }
}

impl From<[u8; SEED_HASH_BYTESIZE]> for SeedHash {
    fn from(bytes: [u8; SEED_HASH_BYTESIZE]) -> Self {
        Self(bytes)
    }
}

/// Fixed-size memo record: `revision || seed_hash`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoRecord([u8; MEMO_BYTESIZE]);

impl MemoRecord {
    /// Encode the record for a revision and seed hash
    pub fn serialize(revision: Revision, seed_hash: &SeedHash) -> Self {
        let mut bytes = [0u8; MEMO_BYTESIZE];
        bytes[..REVISION_BYTESIZE].copy_from_slice(&revision.to_le_bytes());
        bytes[REVISION_BYTESIZE..].copy_from_slice(seed_hash.as_bytes());
        Self(bytes)
    }

    /// Wrap bytes read from disk as-is
    pub fn from_bytes(bytes: [u8; MEMO_BYTESIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MEMO_BYTESIZE] {
        &self.0
    }

    /// Revision field, for display only
    pub fn revision(&self) -> Revision {
        let mut raw = [0u8; REVISION_BYTESIZE];
        raw.copy_from_slice(&self.0[..REVISION_BYTESIZE]);
        Revision(u32::from_le_bytes(raw))
    }

    /// Seed hash field, for display only
    pub fn seed_hash(&self) -> SeedHash {
        let mut raw = [0u8; SEED_HASH_BYTESIZE];
        raw.copy_from_slice(&self.0[REVISION_BYTESIZE..]);
        SeedHash(raw)
    }
}
