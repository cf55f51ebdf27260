// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure side of an invocation outcome.

use std::path::PathBuf;
use std::time::Duration;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

/// Errors that can end an invocation.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Working directory is missing, not a directory, or unreadable.
    /// Nothing was spawned.
    #[error("working directory `{}` is not usable: {source}", path.display())]
    WorkingDir { path: PathBuf, source: std::io::Error },

    /// Command not found, not executable, or empty.
    #[error("failed to launch `{command}`: {source}")]
    Launch { command: String, source: std::io::Error },

    /// The process ran and exited unsuccessfully. `exit_code` is `None`
    /// when it was terminated by a signal.
    #[error("command `{command}` failed with {}: {stderr}", describe_exit(*exit_code))]
    NonZeroExit { command: String, exit_code: Option<i32>, stderr: String },

    /// The process outlived the configured timeout and was killed.
    #[error("command `{command}` timed out after {}ms", timeout.as_millis())]
    Timeout { command: String, timeout: Duration },

    /// A pipe to or from the running process failed.
    #[error("i/o error while running `{command}`: {source}")]
    Io { command: String, source: std::io::Error },
}

impl RunError {
    /// True when the process never started.
    pub fn is_launch(&self) -> bool {
        matches!(self, RunError::WorkingDir { .. } | RunError::Launch { .. })
    }

    /// Exit code of a process that ran to completion unsuccessfully.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunError::NonZeroExit { exit_code, .. } => *exit_code,
            _ => None,
        }
    }

    /// Text to show the user: captured stderr for a failed exit, the
    /// rendered error otherwise.
    pub fn error_text(&self) -> String {
        match self {
            RunError::NonZeroExit { stderr, .. } => stderr.clone(),
            other => other.to_string(),
        }
    }
}

fn describe_exit(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    }
}
