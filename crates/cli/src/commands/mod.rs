// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations.
//!
//! Every command follows the same shape: collect values (from arguments or
//! a prompt), run one `bm bmp ...` invocation, and report the outcome
//! through the notifier.

mod account;
mod interaction;
mod project;

#[cfg(test)]
mod test_helpers;

use std::path::PathBuf;

use anyhow::Result;
use bm_adapters::{Form, FormValues, Notifier, PromptProvider};
use bm_runner::{CommandRunner, Invocation, RunOutput};

use crate::config::Config;
use crate::exit_error::ExitError;

pub use account::{login, logout};
pub use interaction::{create_interaction, InteractionType};
pub use project::{deploy, pull, scope};

/// What every invocation is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub program: String,
    pub base_args: Vec<String>,
    pub interaction_subcommand: String,
    /// Project directory the tool runs in.
    pub cwd: PathBuf,
}

impl Settings {
    pub fn from_config(config: &Config, cwd: PathBuf) -> Self {
        Self {
            program: config.program.clone(),
            base_args: config.base_args.clone(),
            interaction_subcommand: config.interaction_subcommand.clone(),
            cwd,
        }
    }
}

/// State for one command run, owned by the caller.
pub struct Context<N, P> {
    pub runner: CommandRunner,
    pub notifier: N,
    pub prompt: P,
    pub settings: Settings,
}

impl<N: Notifier, P: PromptProvider> Context<N, P> {
    pub fn new(runner: CommandRunner, notifier: N, prompt: P, settings: Settings) -> Self {
        Self { runner, notifier, prompt, settings }
    }

    /// `<program> <base_args...> <args...>` in the project directory.
    pub(crate) fn invocation<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new(self.settings.program.as_str(), self.settings.cwd.as_path())
            .with_args(self.settings.base_args.iter().cloned())
            .with_args(args)
    }

    /// `None` when the user dismissed the form.
    pub(crate) async fn ask(&self, form: &Form) -> Result<Option<FormValues>> {
        let values = self.prompt.prompt(form).await?;
        if values.is_none() {
            tracing::info!(form = %form.title, "form dismissed, nothing to run");
        }
        Ok(values)
    }

    /// Run `invocation` and notify once with its outcome.
    ///
    /// Failures are notified as `<error_prefix><error text>` and then
    /// returned as a quiet [`ExitError`]. The outcome alone decides the
    /// result; a notification that cannot be shown is only logged.
    pub(crate) async fn run_and_notify(
        &self,
        invocation: Invocation,
        error_prefix: &str,
        success: impl FnOnce(&RunOutput) -> String,
    ) -> Result<()> {
        tracing::info!(%invocation, "running");
        match self.runner.run(&invocation).await {
            Ok(output) => {
                self.report(Level::Success, &success(&output)).await;
                if let Some(stderr) = &output.stderr {
                    self.report(Level::Success, &format!("warning: {}", stderr.trim_end())).await;
                }
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "invocation failed");
                let text = format!("{}{}", error_prefix, e.error_text().trim_end());
                self.report(Level::Error, &text).await;
                Err(ExitError::reported(&e).into())
            }
        }
    }

    async fn report(&self, level: Level, text: &str) {
        let sent = match level {
            Level::Success => self.notifier.notify_success(text).await,
            Level::Error => self.notifier.notify_error(text).await,
        };
        if let Err(e) = sent {
            tracing::warn!(error = %e, %text, "notification not shown");
        }
    }
}

#[derive(Clone, Copy)]
enum Level {
    Success,
    Error,
}
