// src/core/scanner.rs
pub mod error;
pub mod file;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

use anyhow::{Context as _, Result};
use std::borrow::Cow;
use std::fmt::Display;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::core::binary::is_non_text_file;
use crate::core::scanner::file::scan_file;
use crate::core::scanner::utils::{clean_path, is_skipped_dir};
use crate::models::ScanStats;

/// Recursively scans a directory tree and writes every annotated line to `out`.
///
/// Entries are visited depth-first in file name order and reported under
/// their cleaned path (`./src/a.go` is shown as `src/a.go`); the root itself
/// is shown as given. Directories named
/// `.git`, `node_modules` or `vendor` are not entered and files that look
/// binary are skipped. Problems with single entries are written to `err` as
/// `warn: ...` lines and the walk carries on.
///
/// # Arguments
///
/// * `root` - The directory (or single file) to scan
/// * `out` - Receives one line per match
/// * `err` - Receives one line per recoverable problem
///
/// # Returns
///
/// * `Ok(ScanStats)` - Counters for the completed walk
///
/// # Errors
///
/// This function may return an error if:
/// * The root cannot be accessed
/// * Writing to `out` or `err` fails
#[inline]
pub fn scan_directory<O, E>(root: &Path, out: &mut O, err: &mut E) -> Result<ScanStats>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    fs::metadata(root).with_context(|| format!("cannot access {}", root.display()))?;

    let mut stats = ScanStats::new();
    let mut entries = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(walk_err) => {
                let path = report_path(walk_err.path().unwrap_or(root), walk_err.depth());
                match walk_err.io_error() {
                    Some(io_err) => warn(err, &mut stats, "access", &path, io_err)?,
                    None => warn(err, &mut stats, "access", &path, &walk_err)?,
                }
                continue;
            }
        };

        if entry.file_type().is_dir() {
            if is_skipped_dir(&entry) {
                debug!(path = %entry.path().display(), "skipping directory");
                stats.dirs_skipped = stats.dirs_skipped.saturating_add(1);
                entries.skip_current_dir();
            }
            continue;
        }

        let shown = report_path(entry.path(), entry.depth());
        let path: &Path = &shown;
        if is_non_text_file(path) {
            trace!(path = %path.display(), "skipping binary file");
            stats.files_skipped = stats.files_skipped.saturating_add(1);
            continue;
        }

        match scan_file(path, out) {
            Ok(report) => {
                stats.files_scanned = stats.files_scanned.saturating_add(1);
                stats.matches = stats.matches.saturating_add(report.matches);
            }
            Err(scan_err) if scan_err.is_recoverable() => {
                warn(err, &mut stats, "read", path, &scan_err)?;
            }
            Err(scan_err) => return Err(scan_err.into()),
        }
    }

    debug!(
        root = %root.display(),
        files_scanned = stats.files_scanned,
        files_skipped = stats.files_skipped,
        dirs_skipped = stats.dirs_skipped,
        matches = stats.matches,
        warnings = stats.warnings,
        "walk complete"
    );

    Ok(stats)
}

/// The root keeps its spelling; everything below it is cleaned.
fn report_path(path: &Path, depth: usize) -> Cow<'_, Path> {
    if depth == 0 {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(clean_path(path))
    }
}

fn warn<E: Write + ?Sized>(
    err: &mut E,
    stats: &mut ScanStats,
    action: &str,
    path: &Path,
    reason: &dyn Display,
) -> Result<()> {
    stats.warnings = stats.warnings.saturating_add(1);
    writeln!(err, "warn: cannot {action} {}: {reason}", path.display())
        .context("failed to write warning")
}
