// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! create-interaction specs

use crate::prelude::*;

#[test]
fn name_and_type_from_arguments() {
    let temp = Project::empty();
    temp.fake_bm(
        r#"name=$(cat)
[ "$*" = "bmp login --type=message" ] || exit 9
[ "$name" = "greeter" ] || exit 8"#,
    );

    temp.bm_tools()
        .args(&["create-interaction", "greeter", "--type", "message"])
        .passes()
        .stdout_has("Interaction created: greeter");
}

#[test]
fn prompted_type_accepts_option_number() {
    let temp = Project::empty();
    temp.fake_bm(r#"cat > /dev/null; [ "$*" = "bmp login --type=message" ] || exit 9"#);

    temp.bm_tools()
        .args(&["create-interaction"])
        .stdin("greeter\n2\n")
        .passes()
        .stdout_has("Interaction created: greeter")
        .stderr_has("2) message");
}

#[test]
fn prompted_type_defaults_to_madl() {
    let temp = Project::empty();
    temp.fake_bm(r#"cat > /dev/null; [ "$*" = "bmp login --type=madl" ] || exit 9"#);

    temp.bm_tools()
        .args(&["create-interaction"])
        .stdin("greeter\n\n")
        .passes()
        .stdout_has("Interaction created: greeter");
}

#[test]
fn invalid_prompted_type_is_error() {
    let temp = Project::empty();
    temp.fake_bm("touch ran");

    temp.bm_tools().args(&["create-interaction"]).stdin("greeter\nchat\n").fails().code_is(1);
    assert!(!temp.path().join("ran").exists());
}

#[test]
fn subcommand_comes_from_config() {
    let temp = Project::empty();
    temp.fake_bm(r#"cat > /dev/null; [ "$*" = "bmp new --type=madl" ] || exit 9"#);
    temp.file(".config/bm-tools/config.toml", "interaction_subcommand = \"new\"\n");

    temp.bm_tools()
        .args(&["create-interaction", "greeter"])
        .passes()
        .stdout_has("Interaction created: greeter");
}
