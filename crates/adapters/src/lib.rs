// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bm-adapters: user-facing capabilities the commands call into.
//!
//! [`Notifier`] shows an outcome to the user, [`PromptProvider`] collects
//! form input. Both are traits so the commands never depend on a concrete UI.

pub mod notify;
pub mod prompt;

pub use notify::{DesktopNotifier, NotifyError, Notifier, TerminalNotifier};
pub use prompt::{Field, FieldKind, Form, FormValues, LinePrompt, PromptError, PromptProvider};

#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifier, NotifyCall, NotifyLevel};
#[cfg(any(test, feature = "test-support"))]
pub use prompt::FakePrompt;
