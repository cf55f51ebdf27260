// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for timeouts and cancellation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use super::{runner, sh};
use crate::{CommandRunner, Invocation, RunError};

// ---------------------------------------------------------------------------
// Timeout
// ---------------------------------------------------------------------------

#[tokio::test]
async fn timeout_kills_long_running_child() {
    let start = Instant::now();
    let err = CommandRunner::new()
        .timeout(Duration::from_millis(200))
        .run(&Invocation::new("sleep", ".").with_arg("30"))
        .await
        .unwrap_err();

    match err {
        RunError::Timeout { command, timeout } => {
            assert_eq!(command, "sleep");
            assert_eq!(timeout, Duration::from_millis(200));
        }
        other => panic!("expected Timeout, got: {other:?}"),
    }
    assert!(start.elapsed() < Duration::from_secs(10), "elapsed: {:?}", start.elapsed());
}

#[tokio::test]
async fn fast_child_finishes_within_timeout() {
    let output = CommandRunner::new()
        .timeout(Duration::from_secs(30))
        .run(&sh("echo quick"))
        .await
        .unwrap();
    assert_eq!(output.stdout, "quick\n");
}

#[tokio::test]
async fn timeout_covers_child_blocked_on_stdin_reader() {
    // The child never exits on its own while stdin input keeps it busy.
    let inv = sh("cat > /dev/null; sleep 30").with_input("ignored");
    let err = CommandRunner::new().timeout(Duration::from_millis(200)).run(&inv).await.unwrap_err();
    assert!(matches!(err, RunError::Timeout { .. }), "got: {err:?}");
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cancellation_returns_none() {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let start = Instant::now();
    let outcome =
        runner().run_until_cancelled(&Invocation::new("sleep", ".").with_arg("30"), &cancel).await;
    assert!(outcome.is_none());
    assert!(start.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn already_cancelled_token_never_spawns() {
    let dir = tempfile::tempdir().unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let inv = Invocation::new("touch", dir.path()).with_arg("spawned");
    assert!(runner().run_until_cancelled(&inv, &cancel).await.is_none());
    assert!(!dir.path().join("spawned").exists());
}

#[tokio::test]
async fn already_cancelled_token_hides_launch_errors() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let inv = Invocation::new("nonexistent_command_xyz_12345", ".");
    assert!(runner().run_until_cancelled(&inv, &cancel).await.is_none());
}

#[tokio::test]
async fn uncancelled_run_still_delivers() {
    let cancel = CancellationToken::new();
    let outcome = runner().run_until_cancelled(&sh("printf done"), &cancel).await;
    assert_eq!(outcome.unwrap().unwrap().stdout, "done");
}

#[tokio::test]
async fn cancelled_spawn_never_invokes_callback() {
    let calls = Arc::new(AtomicUsize::new(0));
    let cancel = CancellationToken::new();

    let counter = Arc::clone(&calls);
    let handle = runner().spawn_cancellable(
        Invocation::new("sleep", ".").with_arg("30"),
        cancel.clone(),
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    tokio::time::sleep(Duration::from_millis(100)).await;
    cancel.cancel();
    handle.await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn cancel_after_completion_changes_nothing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let cancel = CancellationToken::new();

    let counter = Arc::clone(&calls);
    let handle = runner().spawn_cancellable(sh("true"), cancel.clone(), move |outcome| {
        assert!(outcome.is_ok());
        counter.fetch_add(1, Ordering::SeqCst);
    });
    handle.await.unwrap();
    cancel.cancel();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
