// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io;

/// Cloneable in-memory writer so tests can read what the notifier wrote.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn terminal() -> (TerminalNotifier, Captured, Captured) {
    let out = Captured::default();
    let err = Captured::default();
    (TerminalNotifier::with_writers(out.clone(), err.clone()), out, err)
}

#[tokio::test]
async fn terminal_success_goes_to_stdout() {
    let (notifier, out, err) = terminal();
    notifier.notify_success("Deploy successful").await.unwrap();
    assert_eq!(out.text(), "Deploy successful\n");
    assert_eq!(err.text(), "");
}

#[tokio::test]
async fn terminal_error_goes_to_stderr_with_prefix() {
    let (notifier, out, err) = terminal();
    notifier.notify_error("Error deploying to Blink: denied").await.unwrap();
    assert_eq!(out.text(), "");
    assert_eq!(err.text(), "error: Error deploying to Blink: denied\n");
}

#[yare::parameterized(
    no_newline     = { "done", "done\n" },
    one_newline    = { "done\n", "done\n" },
    many_newlines  = { "done\n\n", "done\n" },
    inner_newline  = { "a\nb\n", "a\nb\n" },
)]
fn terminal_normalizes_trailing_newlines(text: &str, expected: &str) {
    tokio::runtime::Runtime::new().unwrap().block_on(async {
        let (notifier, out, _) = terminal();
        notifier.notify_success(text).await.unwrap();
        assert_eq!(out.text(), expected);
    });
}

#[tokio::test]
async fn fake_notifier_records_in_order() {
    let notifier = FakeNotifier::new();
    notifier.notify_success("one").await.unwrap();
    notifier.notify_error("two").await.unwrap();

    assert_eq!(notifier.calls(), vec![NotifyCall::success("one"), NotifyCall::error("two")]);
}

#[tokio::test]
async fn fake_notifier_clones_share_state() {
    let notifier = FakeNotifier::new();
    let clone = notifier.clone();
    clone.notify_success("shared").await.unwrap();
    assert_eq!(notifier.calls().len(), 1);
    assert_eq!(notifier.calls()[0].level, NotifyLevel::Success);
}
