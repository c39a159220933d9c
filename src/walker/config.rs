//! Configuration types for the walker

/// Longest path the walker will compose before giving up on the whole run.
#[cfg(windows)]
pub const PATH_MAX: usize = 260;
#[cfg(not(windows))]
pub const PATH_MAX: usize = 4096;

/// How entries are told apart as directories or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassifyStrategy {
    /// Trust the type hint from the directory listing, looking up metadata
    /// only when the hint is unknown
    #[default]
    FastHint,
    /// Always look up link-aware metadata
    Metadata,
}

/// Configuration for a walk.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Sum entry sizes; forces a metadata lookup for every entry
    pub count_sizes: bool,
    pub strategy: ClassifyStrategy,
    /// Ceiling for composed child paths, in bytes
    pub max_path_len: usize,
    /// Counting ceiling for either counter. `None` means `u64::MAX`.
    pub limit: Option<u64>,
}

impl WalkerConfig {
    /// Whether every entry needs a metadata lookup.
    pub fn needs_metadata(&self) -> bool {
        self.count_sizes || self.strategy == ClassifyStrategy::Metadata
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            count_sizes: false,
            strategy: ClassifyStrategy::FastHint,
            max_path_len: PATH_MAX,
            limit: None,
        }
    }
}
