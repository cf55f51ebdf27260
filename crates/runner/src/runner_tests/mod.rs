// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the command runner.

use super::*;

mod basic;
mod concurrency;
mod errors;
mod limits;
mod streams;

/// Create a default runner for tests.
pub(crate) fn runner() -> CommandRunner {
    CommandRunner::new()
}

/// `sh -c <script>` in the current directory.
pub(crate) fn sh(script: &str) -> Invocation {
    Invocation::new("sh", ".").with_args(["-c", script])
}

/// Sync wrapper for async execution in parameterized and property tests.
pub(crate) fn run_async<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(f)
}
