// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for command tests.

use std::path::PathBuf;

use async_trait::async_trait;
use bm_adapters::{FakeNotifier, FakePrompt, Notifier, NotifyError};
use bm_runner::CommandRunner;

use super::{Context, Settings};
use crate::exit_error::ExitError;

/// Settings whose tool is `sh -c <script>`; the script sees `bmp <args...>` as `$@`.
pub(crate) fn fake_bm(script: &str) -> Settings {
    Settings {
        program: "sh".to_string(),
        base_args: vec!["-c".to_string(), script.to_string(), "bm".to_string(), "bmp".to_string()],
        interaction_subcommand: "login".to_string(),
        cwd: PathBuf::from("."),
    }
}

pub(crate) fn context(script: &str, prompt: FakePrompt) -> Context<FakeNotifier, FakePrompt> {
    Context::new(CommandRunner::new(), FakeNotifier::new(), prompt, fake_bm(script))
}

/// Script that exits 0 only if it got exactly `args` (space-joined).
pub(crate) fn expect_args(args: &str) -> String {
    format!(r#"[ "$*" = "{args}" ] || {{ echo "unexpected args: $*" >&2; exit 9; }}"#)
}

/// Like [`expect_args`], additionally requiring `stdin` on standard input.
pub(crate) fn expect_args_and_stdin(args: &str, stdin: &str) -> String {
    format!(
        r#"{}; input=$(cat); [ "$input" = "{stdin}" ] || {{ echo "unexpected stdin: $input" >&2; exit 9; }}"#,
        expect_args(args)
    )
}

/// Exit code carried by a command's error.
pub(crate) fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ExitError>().map(|e| e.code).unwrap_or_else(|| panic!("not an ExitError: {err:?}"))
}

/// Notifier whose every delivery fails, like a desktop without a bus.
#[derive(Clone, Default)]
pub(crate) struct BrokenNotifier;

#[async_trait]
impl Notifier for BrokenNotifier {
    async fn notify_success(&self, _text: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Write(std::io::Error::new(std::io::ErrorKind::NotConnected, "no notification bus")))
    }

    async fn notify_error(&self, _text: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Write(std::io::Error::new(std::io::ErrorKind::NotConnected, "no notification bus")))
    }
}

pub(crate) fn broken_context(script: &str) -> Context<BrokenNotifier, FakePrompt> {
    Context::new(CommandRunner::new(), BrokenNotifier, FakePrompt::new(), fake_bm(script))
}
