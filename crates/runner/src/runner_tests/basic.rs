// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for exit codes, stdin, arguments and working directory.

use super::{run_async, runner, sh};
use crate::{CommandRunner, Invocation, RunError};

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn zero_exit_yields_stdout() {
    let output = runner().run(&sh("printf hello")).await.unwrap();
    assert_eq!(output.stdout, "hello");
    assert_eq!(output.exit_code, 0);
    assert_eq!(output.stderr, None);
}

#[yare::parameterized(
    one   = { 1 },
    two   = { 2 },
    large = { 127 },
)]
fn non_zero_exit_yields_stderr(code: i32) {
    run_async(async {
        let script = format!("echo out; echo 'went wrong' >&2; exit {code}");
        let err = runner().run(&sh(&script)).await.unwrap_err();
        match &err {
            RunError::NonZeroExit { command, exit_code, stderr } => {
                assert_eq!(command, "sh");
                assert_eq!(*exit_code, Some(code));
                assert_eq!(stderr, "went wrong\n");
            }
            other => panic!("expected NonZeroExit, got: {other:?}"),
        }
        assert_eq!(err.error_text(), "went wrong\n");
    });
}

#[tokio::test]
async fn non_zero_exit_without_stderr_has_empty_error_text() {
    let err = runner().run(&Invocation::new("false", ".")).await.unwrap_err();
    assert_eq!(err.exit_code(), Some(1));
    assert_eq!(err.error_text(), "");
}

#[tokio::test]
async fn killed_by_signal_is_non_zero_without_code() {
    let err = runner().run(&sh("echo dying >&2; kill -9 $$")).await.unwrap_err();
    match err {
        RunError::NonZeroExit { exit_code, stderr, .. } => {
            assert_eq!(exit_code, None);
            assert_eq!(stderr, "dying\n");
        }
        other => panic!("expected NonZeroExit, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Stderr on success
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stderr_discarded_on_success_by_default() {
    let output = runner().run(&sh("echo ok; echo 'warning: stale' >&2")).await.unwrap();
    assert_eq!(output.stdout, "ok\n");
    assert_eq!(output.stderr, None);
}

#[tokio::test]
async fn stderr_surfaced_on_success_when_enabled() {
    let output = CommandRunner::new()
        .stderr_on_success(true)
        .run(&sh("echo ok; echo 'warning: stale' >&2"))
        .await
        .unwrap();
    assert_eq!(output.stdout, "ok\n");
    assert_eq!(output.stderr.as_deref(), Some("warning: stale\n"));
}

#[tokio::test]
async fn empty_stderr_not_surfaced_on_success() {
    let output = CommandRunner::new().stderr_on_success(true).run(&sh("echo ok")).await.unwrap();
    assert_eq!(output.stderr, None);
}

// ---------------------------------------------------------------------------
// Stdin
// ---------------------------------------------------------------------------

#[tokio::test]
async fn input_is_echoed_back_through_cat() {
    let inv = Invocation::new("cat", ".").with_input("hello");
    let output = runner().run(&inv).await.unwrap();
    assert_eq!(output.stdout, "hello");
}

#[tokio::test]
async fn without_input_stdin_is_at_eof() {
    // cat would block forever if stdin were left open.
    let output = runner().run(&Invocation::new("cat", ".")).await.unwrap();
    assert_eq!(output.stdout, "");
}

#[tokio::test]
async fn input_ignored_by_child_is_not_an_error() {
    let inv = sh("exit 0").with_input("x".repeat(1 << 20));
    let output = runner().run(&inv).await.unwrap();
    assert_eq!(output.stdout, "");
}

#[tokio::test]
async fn input_followed_by_end_of_input() {
    let inv = sh("read line; printf '%s' \"$line\"; cat").with_input("token-123\nrest");
    let output = runner().run(&inv).await.unwrap();
    assert_eq!(output.stdout, "token-123rest");
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

#[yare::parameterized(
    spaces       = { "a b  c" },
    dollar       = { "$HOME" },
    semicolon    = { "x; rm -rf /" },
    quotes       = { "it's \"quoted\"" },
    glob         = { "*" },
    empty        = { "" },
)]
fn arguments_passed_verbatim(arg: &str) {
    run_async(async {
        let inv = Invocation::new("printf", ".").with_args(["%s|", arg]);
        let output = runner().run(&inv).await.unwrap();
        assert_eq!(output.stdout, format!("{arg}|"));
    });
}

// ---------------------------------------------------------------------------
// Working directory
// ---------------------------------------------------------------------------

#[tokio::test]
async fn runs_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    // Canonicalize to resolve symlinks (e.g., /var -> /private/var on macOS)
    let canonical_dir = dir.path().canonicalize().unwrap();

    let output = runner().run(&Invocation::new("pwd", dir.path())).await.unwrap();
    assert_eq!(output.stdout.trim(), canonical_dir.to_str().unwrap());
}

#[tokio::test]
async fn relative_files_resolve_against_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("note.txt"), "from cwd").unwrap();

    let inv = Invocation::new("cat", dir.path()).with_arg("note.txt");
    let output = runner().run(&inv).await.unwrap();
    assert_eq!(output.stdout, "from cwd");
}
