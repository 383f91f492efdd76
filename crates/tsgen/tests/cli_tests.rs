//! Integration tests for the tsgen binary
//!
//! Answers are piped through stdin. External tools are pointed at programs
//! that do not exist, so these tests never touch npm or git.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const MISSING_TOOLS: &str = r#"
tools:
  package_manager: tsgen-test-missing-npm
  vcs: tsgen-test-missing-git
"#;

fn run_tsgen(cwd: &Path, args: &[&str], answers: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tsgen"))
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tsgen");

    // tsgen may exit before reading its answers
    let _ = child.stdin.take().unwrap().write_all(answers.as_bytes());
    child.wait_with_output().unwrap()
}

fn write_settings(dir: &Path) -> String {
    let path = dir.join("settings.yaml");
    std::fs::write(&path, MISSING_TOOLS).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_missing_package_manager_exits_with_status_1() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_settings(temp_dir.path());

    let output = run_tsgen(temp_dir.path(), &["--config", &settings], "demo\n\n8080\n");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tsgen-test-missing-npm"), "stderr: {}", stderr);

    // The directory is created before the failure and left behind
    assert!(temp_dir.path().join("demo").is_dir());
    assert!(!temp_dir.path().join("demo/src/main.ts").exists());
    assert!(!temp_dir.path().join("demo/nodemon.json").exists());
}

#[test]
fn test_invalid_port_exits_before_creating_directory() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_settings(temp_dir.path());

    let output = run_tsgen(temp_dir.path(), &["--config", &settings], "demo\n\nnot-a-port\n");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid port"), "stderr: {}", stderr);
    assert!(!temp_dir.path().join("demo").exists());
}

#[test]
fn test_blank_answers_use_default_name() {
    let temp_dir = TempDir::new().unwrap();
    let settings = write_settings(temp_dir.path());

    let output = run_tsgen(temp_dir.path(), &["-q", "--config", &settings], "\n\n\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(temp_dir.path().join("my-app").is_dir());
}

#[test]
fn test_missing_settings_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_tsgen(
        temp_dir.path(),
        &["--config", "/nonexistent/tsgen.yaml"],
        "\n\n\n",
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("my-app").exists());
}
