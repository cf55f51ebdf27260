// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notifier selected at startup.

use async_trait::async_trait;
use bm_adapters::{DesktopNotifier, Notifier, NotifyError, TerminalNotifier};

use crate::config::NotifierKind;

#[derive(Clone)]
pub enum CliNotifier {
    Terminal(TerminalNotifier),
    Desktop(DesktopNotifier),
}

impl CliNotifier {
    pub fn new(kind: NotifierKind) -> Self {
        match kind {
            NotifierKind::Terminal => CliNotifier::Terminal(TerminalNotifier::stdio()),
            NotifierKind::Desktop => CliNotifier::Desktop(DesktopNotifier::new("Blink")),
        }
    }
}

#[async_trait]
impl Notifier for CliNotifier {
    async fn notify_success(&self, text: &str) -> Result<(), NotifyError> {
        match self {
            CliNotifier::Terminal(n) => n.notify_success(text).await,
            CliNotifier::Desktop(n) => n.notify_success(text).await,
        }
    }

    async fn notify_error(&self, text: &str) -> Result<(), NotifyError> {
        match self {
            CliNotifier::Terminal(n) => n.notify_error(text).await,
            CliNotifier::Desktop(n) => n.notify_error(text).await,
        }
    }
}
