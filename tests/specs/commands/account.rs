// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! login / logout specs

use crate::prelude::*;

#[test]
fn login_passes_token_on_stdin() {
    let temp = Project::empty();
    temp.fake_bm(
        r#"token=$(cat)
case "$*" in *s3cret*) exit 9 ;; esac
[ "$token" = "s3cret" ] || exit 8
echo "Welcome back""#,
    );

    temp.bm_tools()
        .args(&["login"])
        .stdin("s3cret\n")
        .passes()
        .stdout_has("Welcome back")
        .stderr_has("Enter your authentication token");
}

#[test]
fn login_uses_default_message_when_tool_is_silent() {
    let temp = Project::empty();
    temp.fake_bm("cat > /dev/null");

    temp.bm_tools().args(&["login"]).stdin("tok\n").passes().stdout_has("Logged in to Blink");
}

#[test]
fn logout_reports_success() {
    let temp = Project::empty();
    temp.fake_bm(r#"[ "$*" = "bmp logout" ] || exit 9"#);

    temp.bm_tools().args(&["logout"]).passes().stdout_has("Logged out of Blink");
}
