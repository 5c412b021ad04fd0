//! Bounded path construction
//!
//! Builds the memo path inside a buffer with a declared capacity. An append
//! that would not leave room for the terminating byte is refused and leaves
//! the buffer as it was.

use crate::error::{DagCacheError, DagCacheResult};
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Default capacity for memo paths, matching the common `PATH_MAX`
pub const DEFAULT_PATH_CAPACITY: usize = 4096;

/// An owned path buffer that never grows past its capacity
#[derive(Debug, Clone)]
pub struct BoundedPath {
    buf: OsString,
    capacity: usize,
}

impl BoundedPath {
    /// Create an empty buffer that can hold `capacity` bytes including the terminator
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: OsString::new(),
            capacity,
        }
    }

    /// Append `suffix` if `len + suffix.len() + 1 <= capacity`
    pub fn push(&mut self, suffix: impl AsRef<OsStr>) -> DagCacheResult<()> {
        let suffix = suffix.as_ref();
        let required = self.buf.len() + suffix.len() + 1;
        if required > self.capacity {
            return Err(DagCacheError::PathOverflow {
                capacity: self.capacity,
                required,
            });
        }
        self.buf.push(suffix);
        Ok(())
    }

    /// Bytes currently held, excluding the terminator
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn into_path_buf(self) -> PathBuf {
        PathBuf::from(self.buf)
    }
}

/// Build `dir/file_name` within `capacity` bytes
///
/// A separator is only inserted when `dir` does not already end with one.
/// `file_name` must be a single normal component so the memo stays inside `dir`.
pub fn memo_path(dir: &Path, file_name: &str, capacity: usize) -> DagCacheResult<PathBuf> {
    if file_name.is_empty() {
        return Err(DagCacheError::PathInvalid {
            path: dir.to_path_buf(),
            reason: "memo file name is empty".to_string(),
        });
    }
    if !is_single_component(file_name) {
        return Err(DagCacheError::PathInvalid {
            path: dir.join(file_name),
            reason: "memo file name must not contain path components".to_string(),
        });
    }

    let mut path = BoundedPath::new(capacity);
    path.push(dir)?;
    if !ends_with_separator(dir) {
        path.push(MAIN_SEPARATOR_STR)?;
    }
    path.push(file_name)?;
    Ok(path.into_path_buf())
}

fn is_single_component(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == file_name
    )
}

fn ends_with_separator(dir: &Path) -> bool {
    dir.as_os_str()
        .as_encoded_bytes()
        .last()
        .is_some_and(|b| std::path::is_separator(char::from(*b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_within_capacity() {
        let mut path = BoundedPath::new(8);
        path.push("abc").unwrap();
        path.push("defg").unwrap();
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn push_leaves_room_for_terminator() {
        let mut path = BoundedPath::new(4);
        let err = path.push("abcd").unwrap_err();
        assert!(matches!(
            err,
            DagCacheError::PathOverflow {
                capacity: 4,
                required: 5
            }
        ));
    }

    #[test]
    fn failed_push_does_not_mutate() {
        let mut path = BoundedPath::new(6);
        path.push("abc").unwrap();
        assert!(path.push("xyz").is_err());
        assert_eq!(path.len(), 3);
        assert_eq!(path.into_path_buf(), PathBuf::from("abc"));
    }

    #[test]
    fn memo_path_inserts_separator() {
        let path = memo_path(Path::new("/tmp/cache"), "full.info", 64).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/cache/full.info"));
    }

    #[test]
    fn memo_path_keeps_trailing_separator() {
        let path = memo_path(Path::new("/tmp/cache/"), "full.info", 64).unwrap();
        assert_eq!(path.as_os_str(), "/tmp/cache/full.info");
    }

    #[test]
    fn memo_path_exact_fit() {
        // "/a" + "/" + "full.info" = 12 bytes, plus terminator
        assert!(memo_path(Path::new("/a"), "full.info", 13).is_ok());
        assert!(memo_path(Path::new("/a"), "full.info", 12).is_err());
    }

    #[test]
    fn memo_path_rejects_empty_name() {
        let err = memo_path(Path::new("/tmp"), "", 64).unwrap_err();
        assert!(matches!(err, DagCacheError::PathInvalid { .. }));
    }

    #[test]
    fn memo_path_rejects_components() {
        for name in ["../x", "a/b", "/etc/passwd", ".", "..", "x/"] {
            let err = memo_path(Path::new("/tmp/cache"), name, 64).unwrap_err();
            assert!(
                matches!(err, DagCacheError::PathInvalid { .. }),
                "{} accepted",
                name
            );
        }
    }
}
