//! dircnt - fast recursive file and directory counter

pub mod counts;
pub mod error;
pub mod output;
pub mod walker;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use counts::{Counters, Totals};
pub use error::{CounterKind, WalkError};
pub use output::{OutputFormat, print_totals, write_totals};
pub use walker::{
    ClassifyStrategy, CollectingReporter, DirSource, FsSource, Reporter, StderrReporter, Walker,
    WalkerConfig,
};
