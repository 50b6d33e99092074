// src/core/annotation.rs
use memchr::memmem;

/// Annotation-style keywords searched for in every line.
///
/// Order matters: when a line contains several keywords, the one listed first
/// here is reported, whatever its position in the line.
pub const ANNOTATION_KEYWORDS: &[&str] = &["TODO", "FIXME", "NOTE", "HACK", "XXX"];

/// Checks whether a line contains any of the annotation keywords.
///
/// The match is a case-sensitive substring search without word boundaries,
/// so `TODOLIST` is reported as `TODO`.
///
/// # Arguments
///
/// * `line` - The line of text to inspect
///
/// # Returns
///
/// * `Some(keyword)` - The first keyword of [`ANNOTATION_KEYWORDS`] found in the line
/// * `None` - If the line contains no keyword
///
/// # Examples
///
/// ```
/// use annotrax::contains_annotation;
///
/// assert_eq!(contains_annotation("// TODO: fix this"), Some("TODO"));
/// assert_eq!(contains_annotation("normal line"), None);
/// ```
#[inline]
#[must_use]
pub fn contains_annotation(line: &str) -> Option<&'static str> {
    contains_annotation_bytes(line.as_bytes())
}

/// Byte-level form of [`contains_annotation`] for lines that may not be
/// valid UTF-8.
#[inline]
#[must_use]
pub fn contains_annotation_bytes(line: &[u8]) -> Option<&'static str> {
    ANNOTATION_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| memmem::find(line, keyword.as_bytes()).is_some())
}
