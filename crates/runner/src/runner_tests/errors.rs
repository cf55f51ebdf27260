// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for launch failures.

use super::runner;
use crate::{Invocation, RunError};

#[tokio::test]
async fn missing_working_directory_is_launch_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    // A process would create this file if it were spawned.
    let marker = dir.path().join("spawned");

    let inv = Invocation::new("touch", &missing).with_arg(marker.to_str().unwrap());
    let err = runner().run(&inv).await.unwrap_err();

    assert!(err.is_launch());
    match err {
        RunError::WorkingDir { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected WorkingDir, got: {other:?}"),
    }
    assert!(!marker.exists(), "no process should have been spawned");
}

#[tokio::test]
async fn file_as_working_directory_is_launch_error() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let err = runner().run(&Invocation::new("true", file.path())).await.unwrap_err();
    assert!(matches!(err, RunError::WorkingDir { .. }), "got: {err:?}");
}

#[tokio::test]
async fn command_not_found_is_launch_error() {
    let err = runner().run(&Invocation::new("nonexistent_command_xyz_12345", ".")).await.unwrap_err();
    match err {
        RunError::Launch { command, source } => {
            assert_eq!(command, "nonexistent_command_xyz_12345");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Launch, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_executable_file_is_launch_error() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("not-executable");
    std::fs::write(&script, "#!/bin/sh\necho hi\n").unwrap();

    let err = runner().run(&Invocation::new(script.to_str().unwrap(), ".")).await.unwrap_err();
    match err {
        RunError::Launch { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected Launch, got: {other:?}"),
    }
}

#[tokio::test]
async fn empty_command_is_launch_error() {
    let err = runner().run(&Invocation::new("", ".")).await.unwrap_err();
    match err {
        RunError::Launch { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidInput);
        }
        other => panic!("expected Launch, got: {other:?}"),
    }
}
