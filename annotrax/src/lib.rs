// src/lib.rs
//! Finds annotation comments (`TODO`, `FIXME`, `NOTE`, `HACK`, `XXX`) in a
//! source tree and prints them as `path:line: [KEYWORD] text`.

use anyhow::{Context as _, Result};
use std::io::{self, BufWriter, Write as _};
use tracing::info;

mod cli;
mod core;
mod logging;
mod models;

pub use cli::{Args, normalize_args};
pub use crate::core::annotation::{ANNOTATION_KEYWORDS, contains_annotation, contains_annotation_bytes};
pub use crate::core::binary::{BINARY_SUFFIXES, is_non_text_file};
pub use crate::core::scanner::error::ScanError;
pub use crate::core::scanner::file::{FileReport, MAX_LINE_LENGTH, scan_file, scan_reader};
pub use crate::core::scanner::scan_directory;
pub use crate::core::scanner::utils::{SKIPPED_DIRS, clean_path};
pub use logging::init_tracing;
pub use models::{AnnotationMatch, ScanStats};

/// Scans `args.dir`, printing matches to stdout and warnings to stderr.
///
/// # Errors
///
/// This function may return an error if:
/// * The scan root cannot be accessed
/// * Writing to stdout or stderr fails
pub fn run(args: Args) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();

    let stats = scan_directory(&args.dir, &mut out, &mut err)?;
    out.flush().context("failed to flush output")?;

    if stats.is_clean() {
        info!(
            dir = %args.dir.display(),
            files_scanned = stats.files_scanned,
            matches = stats.matches,
            "scan finished"
        );
    } else {
        info!(
            dir = %args.dir.display(),
            files_scanned = stats.files_scanned,
            matches = stats.matches,
            warnings = stats.warnings,
            "scan finished with warnings"
        );
    }
    Ok(())
}
