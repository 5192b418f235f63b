use assert_cmd::Command;

#[test]
fn test_help() -> anyhow::Result<()> {
    let output = Command::cargo_bin("pystyle")?.arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("Python style checker"));
    assert!(stdout.contains("--with-timing"));
    Ok(())
}
