// src/core/scanner/file.rs
use std::fs::File;
use std::io::{BufRead, BufReader, Read as _, Write};
use std::path::Path;
use tracing::trace;

use crate::core::annotation::contains_annotation_bytes;
use crate::core::scanner::error::ScanError;
use crate::models::AnnotationMatch;

/// Longest line, in bytes and excluding the newline, that a file may contain.
pub const MAX_LINE_LENGTH: usize = 64 * 1024;

/// Summary of one scanned file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileReport {
    pub lines: u64,
    pub matches: u64,
}

/// Scans a file line by line and writes every annotated line to `out`.
///
/// # Arguments
///
/// * `path` - The file to scan; also used as the path shown in the output
/// * `out` - Where matches are written, one per line
///
/// # Returns
///
/// * `Ok(FileReport)` - Number of lines read and matches written
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened ([`ScanError::Open`])
/// * Reading fails partway through ([`ScanError::Read`])
/// * A line exceeds [`MAX_LINE_LENGTH`] ([`ScanError::LineTooLong`])
/// * Writing to `out` fails ([`ScanError::Output`])
///
/// Matches found before a read error have already been written.
#[inline]
pub fn scan_file<W: Write + ?Sized>(path: &Path, out: &mut W) -> Result<FileReport, ScanError> {
    let file = File::open(path).map_err(ScanError::Open)?;
    let report = scan_reader(path, BufReader::new(file), out)?;
    trace!(
        path = %path.display(),
        lines = report.lines,
        matches = report.matches,
        "scanned file"
    );
    Ok(report)
}

/// Scans already opened content, reporting matches against `path`.
///
/// Lines are split on `\n`; a `\r` right before it is dropped as well.
/// Lines are matched and written as raw bytes, whatever their encoding.
///
/// # Errors
///
/// Same as [`scan_file`], minus the open failure.
pub fn scan_reader<R: BufRead, W: Write + ?Sized>(
    path: &Path,
    mut reader: R,
    out: &mut W,
) -> Result<FileReport, ScanError> {
    let mut report = FileReport::default();
    let mut buf = Vec::new();
    // One byte over the limit so an oversized line can be told apart
    let read_limit = u64::try_from(MAX_LINE_LENGTH.saturating_add(1)).unwrap_or(u64::MAX);

    loop {
        buf.clear();
        let line_number = report.lines.saturating_add(1);
        let read = reader
            .by_ref()
            .take(read_limit)
            .read_until(b'\n', &mut buf)
            .map_err(|source| ScanError::Read {
                line: line_number,
                source,
            })?;
        if read == 0 {
            break;
        }

        let has_newline = buf.last() == Some(&b'\n');
        if has_newline {
            buf.pop();
        } else if buf.len() > MAX_LINE_LENGTH {
            return Err(ScanError::LineTooLong {
                line: line_number,
                limit: MAX_LINE_LENGTH,
            });
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        report.lines = line_number;

        if let Some(keyword) = contains_annotation_bytes(&buf) {
            AnnotationMatch::new(path, line_number, keyword, &buf)
                .write_to(out)
                .map_err(ScanError::Output)?;
            report.matches = report.matches.saturating_add(1);
        }
    }

    Ok(report)
}
