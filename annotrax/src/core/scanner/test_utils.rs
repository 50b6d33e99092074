// src/core/scanner/test_utils.rs
use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

/// Builds a small source tree:
///
/// * `main.go` - TODO on line 3
/// * `notes.txt` - FIXME on line 1
/// * `src/lib.rs` - XXX on line 10
/// * `clean.md` - no annotations
/// * `image.png`, `.git/`, `node_modules/`, `nested/vendor/` - annotations that must never show up
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "main.go", "package main\n\n// TODO: fix this\nfunc main() {}\n")?;
    create_test_file(
        &dir,
        "notes.txt",
        "FIXME: handle error properly\nthis is just a normal line\n",
    )?;
    create_test_file(
        &dir,
        "src/lib.rs",
        &format!("{}    // XXX: strange behavior here  \n", "fn f() {}\n".repeat(9)),
    )?;
    create_test_file(&dir, "clean.md", "nothing to see here\n")?;

    create_test_file(&dir, "image.png", "TODO hidden in a png")?;
    create_test_file(&dir, ".git/config", "TODO in git metadata\n")?;
    create_test_file(&dir, "node_modules/pkg/index.js", "// TODO: npm\n")?;
    create_test_file(&dir, "nested/vendor/dep.go", "// HACK: vendored\n")?;

    Ok(dir)
}
