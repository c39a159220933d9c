//! Error types for dircnt
//!
//! Two groups of errors come out of a walk:
//! - recoverable ones (`DirectoryUnreadable`, `EntryUnreadable`) are handed to a
//!   [`Reporter`](crate::walker::Reporter) and the traversal carries on
//! - fatal ones (`PathTooLong`, `LimitReached`) stop the whole traversal and are
//!   returned to the caller

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which counter hit its ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    Files,
    Directories,
}

impl fmt::Display for CounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounterKind::Files => f.write_str("files"),
            CounterKind::Directories => f.write_str("directories"),
        }
    }
}

/// Errors raised while counting a directory tree.
#[derive(Error, Debug)]
pub enum WalkError {
    /// A directory could not be opened or listed
    #[error("{}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Metadata for a single entry could not be read
    #[error("{}: {source}", path.display())]
    EntryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A composed child path exceeds the path-length ceiling
    #[error("path too long ({len} > {max}) {}", path.display())]
    PathTooLong { path: PathBuf, len: usize, max: usize },

    /// A counter is already at its ceiling
    #[error("{}", limit_message(*kind, *files, *dirs))]
    LimitReached {
        kind: CounterKind,
        files: u64,
        dirs: u64,
    },
}

fn limit_message(kind: CounterKind, files: u64, dirs: u64) -> String {
    match kind {
        CounterKind::Files => format!(
            "reached maximum number of files to count ({}) after {} directories",
            files, dirs
        ),
        CounterKind::Directories => format!(
            "reached maximum number of directories to count ({}) after {} files",
            dirs, files
        ),
    }
}

impl WalkError {
    /// Whether the traversal can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WalkError::DirectoryUnreadable { .. } | WalkError::EntryUnreadable { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, WalkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_message_names_path_and_cause() {
        let err = WalkError::DirectoryUnreadable {
            path: PathBuf::from("/r/locked"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("/r/locked: "), "got: {}", msg);
        assert!(msg.to_lowercase().contains("permission denied"), "got: {}", msg);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_path_too_long_message() {
        let err = WalkError::PathTooLong {
            path: PathBuf::from("/a/bcdef"),
            len: 8,
            max: 4,
        };
        assert_eq!(err.to_string(), "path too long (8 > 4) /a/bcdef");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_limit_message_includes_totals() {
        let err = WalkError::LimitReached {
            kind: CounterKind::Directories,
            files: 7,
            dirs: 3,
        };
        assert_eq!(
            err.to_string(),
            "reached maximum number of directories to count (3) after 7 files"
        );

        let err = WalkError::LimitReached {
            kind: CounterKind::Files,
            files: 5,
            dirs: 2,
        };
        assert_eq!(
            err.to_string(),
            "reached maximum number of files to count (5) after 2 directories"
        );
    }
}
