//! Directory listing capability
//!
//! The walker never touches `std::fs` directly. It goes through a
//! [`DirSource`], which lists a directory as a lazy sequence of [`RawEntry`]
//! values and answers link-aware metadata queries. [`FsSource`] is the real
//! filesystem; tests plug in simulated listings.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// Cheap, possibly missing indication of an entry's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    Directory,
    NotDirectory,
    Unknown,
}

/// One item from a directory listing.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub name: OsString,
    pub hint: TypeHint,
}

impl RawEntry {
    pub fn new(name: impl Into<OsString>, hint: TypeHint) -> Self {
        Self {
            name: name.into(),
            hint,
        }
    }

    /// `.` or `..`
    pub fn is_self_or_parent(&self) -> bool {
        self.name == "." || self.name == ".."
    }
}

/// Authoritative attributes of an entry, not following symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    pub is_dir: bool,
    pub len: u64,
}

impl From<fs::Metadata> for EntryMeta {
    fn from(meta: fs::Metadata) -> Self {
        Self {
            is_dir: meta.is_dir(),
            len: meta.len(),
        }
    }
}

/// Something that can list directories and describe their entries.
pub trait DirSource {
    type Entries: Iterator<Item = io::Result<RawEntry>>;

    /// Open `path` for listing. The returned handle is released when dropped.
    fn read_dir(&self, path: &Path) -> io::Result<Self::Entries>;

    /// Link-aware metadata for `path`.
    fn metadata(&self, path: &Path) -> io::Result<EntryMeta>;
}

/// The local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DirSource for FsSource {
    type Entries = FsEntries;

    fn read_dir(&self, path: &Path) -> io::Result<FsEntries> {
        fs::read_dir(path).map(FsEntries)
    }

    fn metadata(&self, path: &Path) -> io::Result<EntryMeta> {
        fs::symlink_metadata(path).map(EntryMeta::from)
    }
}

/// Lazy listing over `std::fs::ReadDir`.
pub struct FsEntries(fs::ReadDir);

impl Iterator for FsEntries {
    type Item = io::Result<RawEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = match self.0.next()? {
            Ok(entry) => entry,
            Err(e) => return Some(Err(e)),
        };
        // file_type() does not follow symlinks, so a link to a directory
        // comes back as NotDirectory.
        let hint = match entry.file_type() {
            Ok(ft) if ft.is_dir() => TypeHint::Directory,
            Ok(_) => TypeHint::NotDirectory,
            Err(_) => TypeHint::Unknown,
        };
        Some(Ok(RawEntry::new(entry.file_name(), hint)))
    }
}
