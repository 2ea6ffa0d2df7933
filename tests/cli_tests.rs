//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn clipclear_bin() -> Command {
    Command::cargo_bin("clipclear").expect("binary builds")
}

#[test]
fn help_output() {
    clipclear_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn version_output() {
    clipclear_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipclear"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    clipclear_bin().arg("--no-such-flag").assert().failure();
}

#[test]
fn prints_result_line_and_matching_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("clipboard_clear.log");

    let output = clipclear_bin()
        .arg("--log-file")
        .arg(&log_path)
        .output()
        .expect("Failed to execute command");

    // Whether clearing succeeds depends on the host; the stdout line and
    // exit code must agree either way.
    let stdout = String::from_utf8_lossy(&output.stdout);
    if output.status.success() {
        assert_eq!(stdout.trim_end(), "Clipboard cleared successfully");
    } else {
        assert_eq!(output.status.code(), Some(1));
        assert_eq!(stdout.trim_end(), "Failed to clear clipboard");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to clear clipboard"));
    }
}

#[test]
fn every_run_writes_timestamped_log_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("clipboard_clear.log");

    clipclear_bin()
        .arg("--log-file")
        .arg(&log_path)
        .output()
        .expect("Failed to execute command");

    let content = std::fs::read_to_string(&log_path).expect("log file exists");
    let lines: Vec<&str> = content.lines().collect();
    assert!(!lines.is_empty());
    assert!(lines[0].contains("Clipboard clear requested"));

    for line in &lines {
        // "YYYY-MM-DD HH:MM:SS - <message>"
        assert!(line.len() > 22, "short log line: {}", line);
        let (stamp, rest) = line.split_at(19);
        assert!(rest.starts_with(" - "), "malformed log line: {}", line);
        assert!(
            chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").is_ok(),
            "bad timestamp in log line: {}",
            line
        );
    }
}

#[test]
fn log_file_env_var_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("from_env.log");

    clipclear_bin()
        .env("CLIPCLEAR_LOG_FILE", &log_path)
        .output()
        .expect("Failed to execute command");

    assert!(log_path.exists());
}

#[test]
fn appends_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("clipboard_clear.log");

    for _ in 0..2 {
        clipclear_bin()
            .arg("--log-file")
            .arg(&log_path)
            .output()
            .expect("Failed to execute command");
    }

    let content = std::fs::read_to_string(&log_path).unwrap();
    let requests = content
        .lines()
        .filter(|l| l.contains("Clipboard clear requested"))
        .count();
    assert_eq!(requests, 2);
}
