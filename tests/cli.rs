use std::process::Command;

#[test]
fn missing_file_reports_once_without_logging() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.xlsx");

    let output = Command::new(env!("CARGO_BIN_EXE_excel-inspect"))
        .arg(&path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let diagnostics = stdout
        .lines()
        .filter(|line| line.starts_with("Error analyzing file: "))
        .count();
    assert_eq!(diagnostics, 1);

    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn rust_log_enables_diagnostic_logging() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.xlsx");

    let output = Command::new(env!("CARGO_BIN_EXE_excel-inspect"))
        .arg(&path)
        .env("RUST_LOG", "error")
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("inspection aborted"), "stderr was: {stderr}");
}
