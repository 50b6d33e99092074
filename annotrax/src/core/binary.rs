// src/core/binary.rs
use std::path::Path;

/// File name suffixes treated as non-text content. Matching is case-sensitive.
pub const BINARY_SUFFIXES: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".ico", ".pdf", ".zip", ".tar", ".gz", ".exe", ".dll", ".so",
    ".webp", ".svg",
];

/// Guesses from its suffix whether a file holds images, archives or executables.
///
/// This is a lightweight heuristic, the file is never opened.
///
/// # Arguments
///
/// * `path` - The file path to classify
///
/// # Returns
///
/// `true` if the path ends with any entry of [`BINARY_SUFFIXES`], `false` otherwise
#[inline]
#[must_use]
pub fn is_non_text_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    BINARY_SUFFIXES
        .iter()
        .any(|suffix| path_str.ends_with(suffix))
}
