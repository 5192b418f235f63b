use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn pystyle() -> Command {
    let mut command = Command::cargo_bin("pystyle").expect("binary should build");
    command.env("NO_COLOR", "1");
    command
}

#[test]
fn test_single_file_report() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    fs::write(directory.path().join("naming.py"), "MyVar=1\n")?;

    let output = pystyle()
        .current_dir(directory.path())
        .arg("naming.py")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout,
        "naming.py: line 1: S011 Variable MyVar should be written in snake_case\n\
         \nFound 1 error.\n"
    );
    Ok(())
}

#[test]
fn test_clean_file_passes() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    fs::write(directory.path().join("clean.py"), "x=1\n")?;

    let output = pystyle()
        .current_dir(directory.path())
        .arg("clean.py")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, "All checks passed!\n");
    Ok(())
}

#[test]
fn test_directory_mode_sorted_order() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    fs::write(directory.path().join("b.py"), "Second=2\n")?;
    fs::write(directory.path().join("a.py"), "First=1\n")?;

    let output = pystyle()
        .current_dir(directory.path())
        .arg(".")
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout)?;
    let first = stdout.find("a.py: line 1: S011 Variable First").unwrap();
    let second = stdout.find("b.py: line 1: S011 Variable Second").unwrap();
    assert!(first < second);
    assert!(stdout.contains("Found 2 errors."));
    Ok(())
}

#[test]
fn test_parse_error_is_isolated() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    fs::write(directory.path().join("broken.py"), "def f(:\n")?;
    fs::write(directory.path().join("ok.py"), "Camel=1\n")?;

    let output = pystyle()
        .current_dir(directory.path())
        .arg(".")
        .output()?;

    // The run reports the parse error, but the other file is still checked
    // and the broken file still gets its line checks.
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Failed to parse"));
    assert!(stdout.contains("broken.py: line 1: S002"));
    assert!(stdout.contains("ok.py: line 1: S011 Variable Camel"));
    Ok(())
}

#[test]
fn test_missing_path() -> anyhow::Result<()> {
    let output = pystyle().arg("no/such/path.py").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("pystyle failed"));
    assert!(stderr.contains("Failed to access path"));
    Ok(())
}

#[test]
fn test_no_python_files_warns() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    fs::write(directory.path().join("notes.txt"), "nothing here\n")?;

    let output = pystyle()
        .current_dir(directory.path())
        .arg(".")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("No Python files found"));
    Ok(())
}

#[test]
fn test_blank_counter_reset_between_files() -> anyhow::Result<()> {
    let directory = TempDir::new()?;
    // Four trailing blank lines in the first file must not leak an S006
    // into the first line of the second file.
    fs::write(directory.path().join("a.py"), "x=1\n\n\n\n\n")?;
    fs::write(directory.path().join("b.py"), "y=2\n")?;

    let output = pystyle()
        .current_dir(directory.path())
        .arg(".")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout, "All checks passed!\n");
    Ok(())
}
