//! Entry classification: type hint or metadata lookup

use std::io;
use std::path::Path;

use tracing::debug;

use super::config::WalkerConfig;
use super::source::{DirSource, RawEntry, TypeHint};

/// How a classification was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    Hint,
    Metadata,
}

/// Result of classifying one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub is_dir: bool,
    /// Byte size from metadata, 0 when only the hint was used
    pub size: u64,
    pub basis: Basis,
}

/// Decide whether `entry` (living at `path`) is a directory.
///
/// The hint is used only when it is known and the configuration does not
/// require metadata. Otherwise the link-aware metadata is authoritative.
pub fn classify<S: DirSource>(
    source: &S,
    config: &WalkerConfig,
    entry: &RawEntry,
    path: &Path,
) -> io::Result<Classified> {
    if !config.needs_metadata() {
        match entry.hint {
            TypeHint::Directory | TypeHint::NotDirectory => {
                let is_dir = entry.hint == TypeHint::Directory;
                debug!("{} is_dir={} via type hint", path.display(), is_dir);
                return Ok(Classified {
                    is_dir,
                    size: 0,
                    basis: Basis::Hint,
                });
            }
            TypeHint::Unknown => {
                debug!("type hint unknown for {}, looking up metadata", path.display());
            }
        }
    }

    let meta = source.metadata(path)?;
    debug!(
        "{} is_dir={} size={} via metadata",
        path.display(),
        meta.is_dir,
        meta.len
    );
    Ok(Classified {
        is_dir: meta.is_dir,
        size: meta.len,
        basis: Basis::Metadata,
    })
}
