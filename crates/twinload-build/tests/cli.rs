//! Process-level checks for the twinload-build binary.

use std::io::Write;
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_twinload-build"))
}

#[test]
fn test_single_argument_exits_with_usage_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"from,to,type\nsite1,,\n").unwrap();

    let output = binary().arg(file.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WORKSPACE_ID"), "stderr: {stderr}");
    // Nothing is logged because no work was started.
    assert!(output.stdout.is_empty());
}

#[test]
fn test_no_arguments_exits_with_usage_error() {
    let output = binary().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unreadable_input_fails_before_remote_work() {
    let dir = tempfile::tempdir().unwrap();
    let output = binary()
        .arg(dir.path().join("missing.csv"))
        .arg("factory")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read input"), "stderr: {stderr}");
}
