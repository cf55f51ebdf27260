// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Success side of an invocation outcome.

use std::time::Duration;

use crate::RunError;

/// Exactly one of these is produced per invocation.
pub type Outcome = Result<RunOutput, RunError>;

/// Result of a process that exited with code 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// Everything the process wrote to stdout.
    pub stdout: String,
    /// Stderr text, kept only when the runner surfaces stderr on success
    /// and the process actually wrote some.
    pub stderr: Option<String>,
    pub exit_code: i32,
    /// Wall-clock time from spawn to exit.
    pub duration: Duration,
}

/// Decode an accumulated stream, replacing invalid UTF-8 rather than failing.
pub(crate) fn decode_stream(bytes: Vec<u8>, stream: &'static str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(stream, valid_up_to = e.utf8_error().valid_up_to(), "invalid UTF-8 in output, decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
