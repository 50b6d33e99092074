// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, scan, scan_bytes, setup_test_directory};
use annotrax::MAX_LINE_LENGTH;
use anyhow::Result;

#[test]
fn test_empty_directory() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;

    let output = scan(temp_dir.path())?;

    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    assert_eq!(output.stats.files_scanned, 0);
    Ok(())
}

#[test]
fn test_oversized_line_only_affects_its_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let long_line = "z".repeat(MAX_LINE_LENGTH * 2);
    create_test_file(
        temp_dir.path(),
        "big.txt",
        &format!("HACK: kept\n{long_line}\nHACK: lost\n"),
    )?;

    let output = scan(temp_dir.path())?;

    assert!(output.stdout.contains("[HACK] HACK: kept"));
    assert!(!output.stdout.contains("HACK: lost"));
    assert!(output.stdout.contains("[XXX]"), "Later files are still scanned");
    assert_eq!(output.stderr.lines().count(), 1);
    assert!(output.stderr.starts_with("warn: cannot read "));
    assert_eq!(output.stats.warnings, 1);
    Ok(())
}

#[test]
fn test_mixed_line_endings_and_whitespace() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    create_test_file(
        temp_dir.path(),
        "win.txt",
        "one\r\n\t\tFIXME: tabs and crlf \r\nlast TODO",
    )?;

    let output = scan(temp_dir.path())?;

    let path = temp_dir.path().join("win.txt");
    assert_eq!(
        output.stdout,
        format!(
            "{0}:2: [FIXME] FIXME: tabs and crlf\n{0}:3: [TODO] last TODO\n",
            path.display()
        )
    );
    Ok(())
}

#[test]
fn test_latin1_content_is_scanned() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("latin1.c");
    std::fs::write(
        &path,
        b"/* caf\xe9 */\n\t/* TODO: caf\xe9 cr\xe8me */ \n/* FIXME: \xff\xfe */\n",
    )?;

    let output = scan_bytes(temp_dir.path())?;

    let mut expected = path.as_os_str().as_encoded_bytes().to_vec();
    expected.extend_from_slice(b":2: [TODO] /* TODO: caf\xe9 cr\xe8me */\n");
    expected.extend_from_slice(path.as_os_str().as_encoded_bytes());
    expected.extend_from_slice(b":3: [FIXME] /* FIXME: \xff\xfe */\n");
    assert_eq!(output, expected);
    Ok(())
}
