//! Binary-level tests: informational flags and the missing-host exit.

use std::process::Command;

fn pals() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pals"))
}

#[test]
fn test_version_flag() {
    let output = pals()
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "Version flag should exit with code 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("pals {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let output = pals().arg("-h").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("USAGE"));
    assert!(stdout.contains("PALS_INIT_DATA"));
}

#[test]
fn test_missing_init_data_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = pals()
        .env_remove("PALS_INIT_DATA")
        .env_remove("PALS_DEV")
        .env("PALS_LOG_FILE", dir.path().join("pals.log"))
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("pals: "), "stderr was {:?}", stderr);
    // Nothing was drawn: the terminal was never set up.
    assert!(output.stdout.is_empty());
}
