//! Running file and directory counts
//!
//! A single [`Counters`] value is created before a walk, threaded through every
//! recursive call by `&mut`, and turned into [`Totals`] once at the end.

use serde::Serialize;

use crate::error::{CounterKind, Result, WalkError};

/// Final counts of a finished walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Number of non-directory entries
    pub files: u64,
    /// Number of directories, not counting the root itself
    pub directories: u64,
    /// Sum of file sizes in bytes (size accounting only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_bytes: Option<u64>,
    /// Sum of directory sizes in bytes (size accounting only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir_bytes: Option<u64>,
}

impl Totals {
    /// True when nothing at all was counted.
    pub fn is_empty(&self) -> bool {
        self.files == 0 && self.directories == 0
    }
}

/// Mutable aggregate updated by the walker.
#[derive(Debug)]
pub struct Counters {
    files: u64,
    dirs: u64,
    file_bytes: u64,
    dir_bytes: u64,
    track_sizes: bool,
    limit: u64,
}

impl Counters {
    pub fn new(track_sizes: bool) -> Self {
        Self {
            files: 0,
            dirs: 0,
            file_bytes: 0,
            dir_bytes: 0,
            track_sizes,
            limit: u64::MAX,
        }
    }

    /// Lower the counting ceiling. Either counter reaching `limit` is treated
    /// exactly like hitting `u64::MAX`.
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    pub fn files(&self) -> u64 {
        self.files
    }

    pub fn dirs(&self) -> u64 {
        self.dirs
    }

    pub fn tracks_sizes(&self) -> bool {
        self.track_sizes
    }

    /// Record a non-directory entry.
    pub fn record_file(&mut self, size: u64) -> Result<()> {
        if self.files >= self.limit {
            return Err(self.limit_reached(CounterKind::Files));
        }
        self.files += 1;
        if self.track_sizes {
            self.file_bytes = self.file_bytes.saturating_add(size);
        }
        Ok(())
    }

    /// Record a directory entry.
    pub fn record_directory(&mut self, size: u64) -> Result<()> {
        if self.dirs >= self.limit {
            return Err(self.limit_reached(CounterKind::Directories));
        }
        self.dirs += 1;
        if self.track_sizes {
            self.dir_bytes = self.dir_bytes.saturating_add(size);
        }
        Ok(())
    }

    fn limit_reached(&self, kind: CounterKind) -> WalkError {
        WalkError::LimitReached {
            kind,
            files: self.files,
            dirs: self.dirs,
        }
    }

    /// Finalize and return the collected totals.
    pub fn finish(self) -> Totals {
        Totals {
            files: self.files,
            directories: self.dirs,
            file_bytes: self.track_sizes.then_some(self.file_bytes),
            dir_bytes: self.track_sizes.then_some(self.dir_bytes),
        }
    }
}

impl Default for Counters {
    fn default() -> Self {
        Self::new(false)
    }
}
