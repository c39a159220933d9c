//! Walker - depth-first recursive counting

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::counts::{Counters, Totals};
use crate::error::{Result, WalkError};

use super::classify::classify;
use super::config::WalkerConfig;
use super::report::Reporter;
use super::source::{DirSource, FsSource};

/// Recursive file and directory counter.
pub struct Walker<S = FsSource> {
    config: WalkerConfig,
    source: S,
}

impl Walker<FsSource> {
    pub fn new(config: WalkerConfig) -> Self {
        Self::with_source(config, FsSource)
    }
}

impl<S: DirSource> Walker<S> {
    /// Walk listings provided by `source` instead of the local filesystem.
    pub fn with_source(config: WalkerConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Empty counters matching this walker's configuration.
    pub fn counters(&self) -> Counters {
        let counters = Counters::new(self.config.count_sizes);
        match self.config.limit {
            Some(limit) => counters.with_limit(limit),
            None => counters,
        }
    }

    /// Count everything beneath `root` and return the totals.
    ///
    /// Recoverable errors go to `reporter`. A fatal error aborts the walk and
    /// the partial counts are dropped.
    pub fn count(&self, root: &Path, reporter: &mut dyn Reporter) -> Result<Totals> {
        let start = Instant::now();
        let mut counters = self.counters();
        self.walk(root, &mut counters, reporter)?;
        info!(
            "counted {} files and {} directories under {} in {}",
            counters.files(),
            counters.dirs(),
            root.display(),
            humantime::format_duration(start.elapsed())
        );
        Ok(counters.finish())
    }

    /// Count the entries of `path` into `counters`, descending into every
    /// subdirectory.
    pub fn walk(
        &self,
        path: &Path,
        counters: &mut Counters,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        debug!("opening dir {}", path.display());
        let entries = match self.source.read_dir(path) {
            Ok(entries) => entries,
            Err(source) => {
                reporter.report(WalkError::DirectoryUnreadable {
                    path: path.to_path_buf(),
                    source,
                });
                return Ok(());
            }
        };

        let parent_len = path.as_os_str().len();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) => {
                    // Whatever was already counted here stays counted
                    reporter.report(WalkError::DirectoryUnreadable {
                        path: path.to_path_buf(),
                        source,
                    });
                    break;
                }
            };

            let len = parent_len + 1 + entry.name.len();
            let child = path.join(&entry.name);
            if len > self.config.max_path_len {
                return Err(WalkError::PathTooLong {
                    path: child,
                    len,
                    max: self.config.max_path_len,
                });
            }

            debug!("considering {}", child.display());
            let class = match classify(&self.source, &self.config, &entry, &child) {
                Ok(class) => class,
                Err(source) => {
                    reporter.report(WalkError::EntryUnreadable {
                        path: child,
                        source,
                    });
                    continue;
                }
            };

            if class.is_dir {
                if entry.is_self_or_parent() {
                    continue;
                }
                counters.record_directory(class.size)?;
                self.walk(&child, counters, reporter)?;
            } else {
                counters.record_file(class.size)?;
            }
        }

        debug!("closing dir {}", path.display());
        Ok(())
    }
}
