// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! scope / pull / deploy specs

use crate::prelude::*;

#[test]
fn scope_with_argument_reports_new_scope() {
    let temp = Project::empty();
    temp.fake_bm(r#"[ "$*" = "bmp scope demo" ] || exit 9"#);

    temp.bm_tools().args(&["scope", "demo"]).passes().stdout_has("Scope set to: demo");
}

#[test]
fn scope_prompts_on_stdin() {
    let temp = Project::empty();
    temp.fake_bm(r#"[ "$*" = "bmp scope typed" ] || exit 9"#);

    temp.bm_tools()
        .args(&["scope"])
        .stdin("typed\n")
        .passes()
        .stdout_has("Scope set to: typed")
        .stderr_has("Which answerSpace to use?");
}

#[test]
fn scope_dismissed_runs_nothing() {
    let temp = Project::empty();
    temp.fake_bm("touch ran");

    temp.bm_tools().args(&["scope"]).stdin("").passes().stdout_lacks("Scope set to");
    assert!(!temp.path().join("ran").exists());
}

#[test]
fn tool_runs_in_project_directory() {
    let temp = Project::empty();
    temp.fake_bm("touch pulled-here");

    temp.bm_tools().args(&["pull"]).passes().stdout_has("Pull successful");
    assert!(temp.path().join("pulled-here").exists());
}

#[test]
fn deploy_failure_reports_stderr_and_exit_code() {
    let temp = Project::empty();
    temp.fake_bm("echo 'not authorised' >&2; exit 7");

    temp.bm_tools()
        .args(&["deploy"])
        .fails()
        .code_is(7)
        .stderr_has("error: Error deploying to Blink: not authorised");
}

#[test]
fn missing_tool_is_reported() {
    let temp = Project::empty();

    temp.bm_tools()
        .env("BM_TOOLS_PROGRAM", "nonexistent_bm_xyz_12345")
        .args(&["pull"])
        .fails()
        .code_is(1)
        .stderr_has("Error pulling code from Blink: failed to launch `nonexistent_bm_xyz_12345`");
}

#[test]
fn missing_project_directory_is_reported() {
    let temp = Project::empty();
    let tool = temp.fake_bm("exit 0");
    let gone = temp.path().join("gone");

    cli()
        .env("BM_TOOLS_PROGRAM", &tool)
        .args(&["-C", gone.to_str().unwrap(), "pull"])
        .fails()
        .code_is(1)
        .stderr_has("is not usable");
}
