// src/core/scanner/utils.rs
use std::path::{Component, Path, PathBuf};

/// Directory names that are never descended into: VCS metadata and
/// dependency trees.
pub const SKIPPED_DIRS: &[&str] = &[".git", "node_modules", "vendor"];

/// Determines whether a directory entry is a directory that should not be
/// traversed.
///
/// Only the entry's own name is compared, so `src/vendor` is skipped while
/// `src/vendored` and a regular file named `vendor` are not.
///
/// # Arguments
/// * `entry` - The directory entry to check
///
/// # Returns
/// `true` if the entry is a directory named like one of [`SKIPPED_DIRS`]
pub fn is_skipped_dir(entry: &walkdir::DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Lexically normalises a path the way it is shown in reports.
///
/// `.` components are dropped and `..` removes the preceding normal
/// component, so `./src/a.go` becomes `src/a.go`. The filesystem is not
/// consulted. An empty result is `.`.
#[must_use]
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = cleaned.components().next_back();
                if matches!(last, Some(Component::Normal(_))) {
                    cleaned.pop();
                } else if !matches!(last, Some(Component::RootDir | Component::Prefix(_))) {
                    cleaned.push("..");
                }
            }
            other => cleaned.push(other),
        }
    }

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
