// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

/// Errors from notify operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Shows the result of a command to the user
#[async_trait]
pub trait Notifier: Clone + Send + Sync + 'static {
    async fn notify_success(&self, text: &str) -> Result<(), NotifyError>;

    async fn notify_error(&self, text: &str) -> Result<(), NotifyError>;
}

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Prints success text to stdout and error text to stderr.
#[derive(Clone)]
pub struct TerminalNotifier {
    out: SharedWriter,
    err: SharedWriter,
}

impl TerminalNotifier {
    pub fn stdio() -> Self {
        Self::with_writers(std::io::stdout(), std::io::stderr())
    }

    pub fn with_writers(out: impl Write + Send + 'static, err: impl Write + Send + 'static) -> Self {
        Self { out: Arc::new(Mutex::new(Box::new(out))), err: Arc::new(Mutex::new(Box::new(err))) }
    }
}

fn write_line(writer: &SharedWriter, prefix: &str, text: &str) -> Result<(), NotifyError> {
    let mut writer = writer.lock();
    let text = text.trim_end_matches('\n');
    writeln!(writer, "{}{}", prefix, text)?;
    writer.flush()?;
    Ok(())
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn notify_success(&self, text: &str) -> Result<(), NotifyError> {
        write_line(&self.out, "", text)
    }

    async fn notify_error(&self, text: &str) -> Result<(), NotifyError> {
        write_line(&self.err, "error: ", text)
    }
}

/// Desktop notification adapter using notify-rust.
///
/// On macOS, `notify-rust` uses `mac-notification-sys` (Cocoa bindings) to send
/// notifications via the Notification Center. The first notification triggers
/// `ensure_application_set()` which runs an AppleScript to look up a bundle
/// identifier. Without Automation permissions that AppleScript blocks forever,
/// so the bundle identifier is pre-set at construction time.
#[derive(Clone, Debug)]
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        #[cfg(target_os = "macos")]
        {
            let _ = mac_notification_sys::set_application("com.apple.Terminal");
        }
        Self { app_name: app_name.into() }
    }

    /// Waits for delivery so nothing is lost when the process exits right
    /// after. Delivery failures are logged, never returned.
    async fn show(&self, summary: String, body: String) {
        let app_name = self.app_name.clone();
        // notify_rust::Notification::show() is synchronous on macOS.
        let shown = tokio::task::spawn_blocking(move || {
            tracing::info!(%summary, %body, "sending desktop notification");
            match notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&summary)
                .body(&body)
                .show()
            {
                Ok(_) => tracing::debug!(%summary, "desktop notification sent"),
                Err(e) => tracing::warn!(%summary, error = %e, "desktop notification failed"),
            }
        })
        .await;
        if let Err(e) = shown {
            tracing::warn!(error = %e, "desktop notification task failed");
        }
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify_success(&self, text: &str) -> Result<(), NotifyError> {
        self.show(self.app_name.clone(), text.to_string()).await;
        Ok(())
    }

    async fn notify_error(&self, text: &str) -> Result<(), NotifyError> {
        self.show(format!("{} error", self.app_name), text.to_string()).await;
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{Notifier, NotifyError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum NotifyLevel {
        Success,
        Error,
    }

    /// Recorded notification
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct NotifyCall {
        pub level: NotifyLevel,
        pub text: String,
    }

    impl NotifyCall {
        pub fn success(text: impl Into<String>) -> Self {
            Self { level: NotifyLevel::Success, text: text.into() }
        }

        pub fn error(text: impl Into<String>) -> Self {
            Self { level: NotifyLevel::Error, text: text.into() }
        }
    }

    /// Fake notifier for testing
    #[derive(Clone, Default)]
    pub struct FakeNotifier {
        calls: Arc<Mutex<Vec<NotifyCall>>>,
    }

    impl FakeNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded notifications
        pub fn calls(&self) -> Vec<NotifyCall> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl Notifier for FakeNotifier {
        async fn notify_success(&self, text: &str) -> Result<(), NotifyError> {
            self.calls.lock().push(NotifyCall::success(text));
            Ok(())
        }

        async fn notify_error(&self, text: &str) -> Result<(), NotifyError> {
            self.calls.lock().push(NotifyCall::error(text));
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifier, NotifyCall, NotifyLevel};

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
