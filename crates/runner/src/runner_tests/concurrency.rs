// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for callback delivery and isolation between concurrent runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::{runner, sh};
use crate::Invocation;

#[tokio::test]
async fn callback_invoked_once_per_invocation() {
    const RUNS: usize = 32;
    let calls = Arc::new(AtomicUsize::new(0));
    let runner = runner();

    let mut handles = Vec::with_capacity(RUNS);
    for i in 0..RUNS {
        // Mix of successes, failures and launch errors.
        let inv = match i % 3 {
            0 => sh("echo ok"),
            1 => sh("echo bad >&2; exit 1"),
            _ => Invocation::new("nonexistent_command_xyz_12345", "."),
        };
        let counter = Arc::clone(&calls);
        handles.push(runner.spawn(inv, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), RUNS);
}

#[tokio::test]
async fn concurrent_runs_see_only_their_own_output() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let runner = runner();

    let inv_a = Invocation::new("sh", a.path()).with_args(["-c", "sleep 0.2; printf A"]);
    let inv_b = Invocation::new("sh", b.path()).with_args(["-c", "printf B; sleep 0.1"]);
    let (out_a, out_b) = tokio::join!(runner.run(&inv_a), runner.run(&inv_b));

    assert_eq!(out_a.unwrap().stdout, "A");
    assert_eq!(out_b.unwrap().stdout, "B");
}

#[tokio::test]
async fn spawned_runs_deliver_to_their_own_callbacks() {
    let results = Arc::new(Mutex::new(Vec::new()));
    let runner = runner();

    let mut handles = Vec::new();
    for tag in ["alpha", "beta", "gamma", "delta"] {
        let results = Arc::clone(&results);
        let inv = Invocation::new("printf", ".").with_arg(tag);
        handles.push(runner.spawn(inv, move |outcome| {
            results.lock().push((tag, outcome.map(|o| o.stdout).unwrap_or_default()));
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let results = results.lock();
    assert_eq!(results.len(), 4);
    for (tag, stdout) in results.iter() {
        assert_eq!(tag, stdout);
    }
}
