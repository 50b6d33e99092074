// src/core/scanner/error.rs
use std::io;
use thiserror::Error;

/// Reasons a single file could not be scanned to the end.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file could not be opened for reading.
    #[error(transparent)]
    Open(io::Error),

    /// Reading failed partway through the file.
    #[error("line {line}: {source}")]
    Read { line: u64, source: io::Error },

    /// A line did not fit in the line buffer.
    #[error("line {line}: line longer than {limit} bytes")]
    LineTooLong { line: u64, limit: usize },

    /// A match could not be written to the output stream.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl ScanError {
    /// Returns `true` if the walk can move on to the next file.
    ///
    /// Only output failures are fatal: once stdout is gone there is nowhere to
    /// report further matches.
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Output(_))
    }
}
