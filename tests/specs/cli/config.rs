// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config file and environment override specs

use crate::prelude::*;

#[test]
fn config_file_sets_program_and_base_args() {
    let temp = Project::empty();
    let tool = temp.fake_bm(r#"echo "args: $*" >&2; exit 4"#);
    let config = temp.file(
        "bm-tools.toml",
        &format!("program = {:?}\nbase_args = [\"bmp\", \"--quiet\"]\n", tool.display().to_string()),
    );

    temp.bm_tools()
        .env_remove("BM_TOOLS_PROGRAM")
        .args(&["--config", config.to_str().unwrap(), "pull"])
        .fails()
        .code_is(4)
        .stderr_has("Error pulling code from Blink: args: bmp --quiet pull");
}

#[test]
fn default_config_path_is_used_when_present() {
    let temp = Project::empty();
    temp.fake_bm("echo 'cached' >&2");
    temp.file(".config/bm-tools/config.toml", "stderr_on_success = true\n");

    temp.bm_tools()
        .args(&["deploy"])
        .passes()
        .stdout_has("Deploy successful")
        .stdout_has("warning: cached");
}

#[test]
fn stderr_on_success_is_off_by_default() {
    let temp = Project::empty();
    temp.fake_bm("echo 'cached' >&2");

    temp.bm_tools().args(&["deploy"]).passes().stdout_lacks("warning:");
}

#[test]
fn unknown_config_key_is_error() {
    let temp = Project::empty();
    let config = temp.file("bad.toml", "programme = \"bm\"\n");

    temp.bm_tools()
        .args(&["--config", config.to_str().unwrap(), "pull"])
        .fails()
        .code_is(1)
        .stderr_has("invalid config");
}

#[test]
fn missing_explicit_config_is_error() {
    let temp = Project::empty();
    temp.bm_tools()
        .env("BM_TOOLS_CONFIG", temp.path().join("nope.toml"))
        .args(&["pull"])
        .fails()
        .stderr_has("failed to read config");
}

#[test]
fn timeout_env_stops_a_hung_tool() {
    let temp = Project::empty();
    temp.fake_bm("exec sleep 30");

    temp.bm_tools()
        .env("BM_TOOLS_TIMEOUT_MS", "200")
        .args(&["pull"])
        .fails()
        .code_is(1)
        .stderr_has("timed out after 200ms");
}
