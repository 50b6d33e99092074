// src/models/scan_stats.rs

/// Counters collected during a single traversal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub files_scanned: u64,
    pub files_skipped: u64,
    pub dirs_skipped: u64,
    pub matches: u64,
    pub warnings: u64,
}

impl ScanStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_scanned: 0,
            files_skipped: 0,
            dirs_skipped: 0,
            matches: 0,
            warnings: 0,
        }
    }

    /// Returns `true` when the traversal emitted no warnings.
    #[inline]
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.warnings == 0
    }
}
