//! CLI smoke tests: verify basic binary behavior.

use std::io::Write;
use std::process::{Command, Stdio};

fn cli_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wellboard"))
}

/// Run the REPL with the mock provider, feeding `script` on stdin.
fn run_script(dir: &tempfile::TempDir, script: &str) -> String {
    let mut child = cli_bin()
        .arg("--provider")
        .arg("mock")
        .arg("--storage-dir")
        .arg(dir.path())
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();
    let output = child.wait_with_output().expect("failed to wait");
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_flag() {
    let output = cli_bin().arg("--help").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "Expected usage info in --help output");
    assert!(stdout.contains("--storage-dir"));
}

#[test]
fn test_version_flag() {
    let output = cli_bin().arg("--version").output().expect("failed to run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wellboard"), "Expected crate name in --version output");
}

#[test]
fn test_invalid_config_does_not_panic() {
    let output = cli_bin()
        .arg("--config")
        .arg("/tmp/nonexistent_wellboard_config_12345.toml")
        .arg("--help")
        .output()
        .expect("failed to run");
    assert!(output.status.success());
}

#[test]
fn test_profile_to_board() {
    let dir = tempfile::TempDir::new().unwrap();
    let stdout = run_script(&dir, "profile 30 female weight-management,better-sleep\nfav 1\nquit\n");
    assert!(stdout.contains("Ten-Minute Walk After Meals"));
    assert!(stdout.contains("★"));
    assert!(dir.path().join("wellness-favorites.json").exists());
}

#[test]
fn test_profile_restored_on_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    run_script(&dir, "profile 40 male hydration\nquit\n");
    let stdout = run_script(&dir, "quit\n");
    assert!(stdout.contains("40 year old male"));
}

#[test]
fn test_bad_input_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let stdout = run_script(&dir, "profile 9 female hydration\ndance\nquit\n");
    assert!(stdout.contains("Invalid profile"));
    assert!(stdout.contains("Unknown command"));
}
