// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::RunError;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

fn launch() -> RunError {
    RunError::Launch {
        command: "bm".to_string(),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    }
}

fn working_dir() -> RunError {
    RunError::WorkingDir {
        path: PathBuf::from("/nope"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    }
}

fn non_zero(exit_code: Option<i32>) -> RunError {
    RunError::NonZeroExit {
        command: "bm".to_string(),
        exit_code,
        stderr: "not logged in\n".to_string(),
    }
}

#[test]
fn launch_failures_are_launch_errors() {
    assert!(launch().is_launch());
    assert!(working_dir().is_launch());
    assert!(!non_zero(Some(1)).is_launch());
}

#[test]
fn error_text_of_failed_exit_is_raw_stderr() {
    assert_eq!(non_zero(Some(2)).error_text(), "not logged in\n");
}

#[test]
fn error_text_of_other_errors_is_display() {
    let err = working_dir();
    assert_eq!(err.error_text(), err.to_string());
    assert!(err.to_string().contains("/nope"), "got: {err}");
}

#[yare::parameterized(
    exit_code = { Some(3), "command `bm` failed with exit code 3: not logged in\n" },
    signal    = { None, "command `bm` failed with a signal: not logged in\n" },
)]
fn non_zero_display(exit_code: Option<i32>, expected: &str) {
    assert_eq!(non_zero(exit_code).to_string(), expected);
}

#[test]
fn timeout_display_in_millis() {
    let err = RunError::Timeout { command: "sleep".to_string(), timeout: Duration::from_secs(2) };
    assert_eq!(err.to_string(), "command `sleep` timed out after 2000ms");
    assert_eq!(err.exit_code(), None);
}
