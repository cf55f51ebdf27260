// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_lists_every_command() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("scope")
        .stdout_has("login")
        .stdout_has("logout")
        .stdout_has("pull")
        .stdout_has("deploy")
        .stdout_has("create-interaction");
}

#[test]
fn no_args_shows_usage_and_fails() {
    cli().fails().code_is(2).stderr_has("Usage:");
}

#[test]
fn create_interaction_help_lists_types() {
    cli()
        .args(&["create-interaction", "--help"])
        .passes()
        .stdout_has("madl")
        .stdout_has("message");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn unknown_notifier_is_rejected() {
    cli().args(&["--notifier", "pager", "pull"]).fails().stderr_has("pager");
}
