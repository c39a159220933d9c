//! Directory walking logic
//!
//! [`Walker`] descends depth-first from a root path, classifies each entry as
//! a directory or not, and accumulates the results into a shared
//! [`Counters`](crate::Counters) value.
//!
//! Classification is a per-entry choice between the listing's type hint and
//! a link-aware metadata lookup, see [`ClassifyStrategy`]. Symbolic links are
//! never followed.

mod classify;
mod config;
mod report;
mod source;
mod walk;

pub use classify::{Basis, Classified, classify};
pub use config::{ClassifyStrategy, PATH_MAX, WalkerConfig};
pub use report::{CollectingReporter, Reporter, StderrReporter};
pub use source::{DirSource, EntryMeta, FsEntries, FsSource, RawEntry, TypeHint};
pub use walk::Walker;
