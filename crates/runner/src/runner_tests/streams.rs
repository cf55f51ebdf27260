// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for output draining: volume, interleaving and decoding.

use proptest::prelude::*;

use super::{run_async, runner, sh};
use crate::Invocation;

const ONE_MB: usize = 1 << 20;

// ---------------------------------------------------------------------------
// Volume (pipe buffers are typically 64 KiB)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn one_megabyte_of_stdout_is_not_truncated() {
    let script = format!("head -c {ONE_MB} /dev/zero | tr '\\0' a");
    let output = runner().run(&sh(&script)).await.unwrap();
    assert_eq!(output.stdout.len(), ONE_MB);
    assert!(output.stdout.bytes().all(|b| b == b'a'));
}

#[tokio::test]
async fn heavy_stderr_does_not_block_stdout() {
    // Stderr fills first; a sequential reader of stdout would deadlock here.
    let script = format!(
        "head -c {ONE_MB} /dev/zero | tr '\\0' e >&2; head -c {ONE_MB} /dev/zero | tr '\\0' o"
    );
    let output = runner().run(&sh(&script)).await.unwrap();
    assert_eq!(output.stdout.len(), ONE_MB);
}

#[tokio::test]
async fn heavy_stderr_is_fully_captured_on_failure() {
    let script = format!("head -c {ONE_MB} /dev/zero | tr '\\0' e >&2; exit 4");
    let err = runner().run(&sh(&script)).await.unwrap_err();
    assert_eq!(err.exit_code(), Some(4));
    assert_eq!(err.error_text().len(), ONE_MB);
}

#[tokio::test]
async fn one_megabyte_of_input_round_trips_through_cat() {
    // cat writes back while we are still writing; stdin and stdout must
    // progress together.
    let input = "0123456789abcdef".repeat(ONE_MB / 16);
    let inv = Invocation::new("cat", ".").with_input(input.clone());
    let output = runner().run(&inv).await.unwrap();
    assert_eq!(output.stdout.len(), input.len());
    assert!(output.stdout == input);
}

#[tokio::test]
async fn interleaved_streams_keep_their_own_text() {
    let script = "for i in 1 2 3; do echo out$i; echo err$i >&2; done; exit 1";
    let err = runner().run(&sh(script)).await.unwrap_err();
    assert_eq!(err.error_text(), "err1\nerr2\nerr3\n");
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_utf8_is_decoded_lossily() {
    let output = runner().run(&sh("printf '\\377abc'")).await.unwrap();
    assert_eq!(output.stdout, "\u{FFFD}abc");
}

#[tokio::test]
async fn multibyte_text_survives_chunking() {
    // 3-byte characters across many 8 KiB reads; chunk edges fall mid-character.
    let input = "→".repeat(50_000);
    let inv = Invocation::new("cat", ".").with_input(input.clone());
    let output = runner().run(&inv).await.unwrap();
    assert!(output.stdout == input);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn stdout_equals_what_the_child_wrote(input in "[^\u{0}]{0,2048}") {
        let inv = Invocation::new("cat", ".").with_input(input.clone());
        let output = run_async(runner().run(&inv)).unwrap();
        prop_assert_eq!(output.stdout, input);
    }
}
