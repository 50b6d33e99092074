// src/models/annotation_match.rs
use std::io::{self, Write};
use std::path::Path;

/// A single annotated line, written out as soon as it is found.
///
/// The line text is kept as raw bytes so that files in any encoding are
/// reported exactly as they are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationMatch<'a> {
    pub path: &'a Path,
    pub line_number: u64,
    pub keyword: &'static str,
    pub text: &'a [u8],
}

impl<'a> AnnotationMatch<'a> {
    /// Builds a match, trimming surrounding whitespace from the line text.
    #[inline]
    #[must_use]
    pub fn new(path: &'a Path, line_number: u64, keyword: &'static str, line: &'a [u8]) -> Self {
        Self {
            path,
            line_number,
            keyword,
            text: trim_space(line),
        }
    }

    /// Writes `<path>:<line>: [<KEYWORD>] <text>` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.path.as_os_str().as_encoded_bytes())?;
        write!(out, ":{}: [{}] ", self.line_number, self.keyword)?;
        out.write_all(self.text)?;
        out.write_all(b"\n")
    }
}

/// Strips leading and trailing Unicode whitespace. Bytes that are not valid
/// UTF-8 are never whitespace, so trimming stops at them.
fn trim_space(line: &[u8]) -> &[u8] {
    let start = line.utf8_chunks().next().map_or(0, |chunk| {
        let valid = chunk.valid();
        valid.len() - valid.trim_start().len()
    });
    let line = line.get(start..).unwrap_or_default();

    let end = match line.utf8_chunks().last() {
        Some(chunk) if chunk.invalid().is_empty() => {
            let valid = chunk.valid();
            line.len() - (valid.len() - valid.trim_end().len())
        }
        _ => line.len(),
    };
    line.get(..end).unwrap_or_default()
}
