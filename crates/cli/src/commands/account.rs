// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bm-tools login | logout`

use anyhow::Result;
use bm_adapters::{Field, Form, Notifier, PromptProvider};

use super::Context;

#[cfg(test)]
#[path = "account_tests.rs"]
mod tests;

/// Prompt for a token and hand it to `bmp login` on stdin.
///
/// The token never appears in the argument list.
pub async fn login<N: Notifier, P: PromptProvider>(ctx: &Context<N, P>) -> Result<()> {
    let form = Form::new("Enter your authentication token").field(Field::password("token", "Token"));
    let Some(values) = ctx.ask(&form).await? else {
        return Ok(());
    };
    let token = values.require("token")?;

    let invocation = ctx.invocation(["login"]).with_input(token);
    ctx.run_and_notify(invocation, "Error logging in to Blink: ", |output| {
        // The tool's own confirmation message is shown as-is.
        match output.stdout.trim() {
            "" => "Logged in to Blink".to_string(),
            message => message.to_string(),
        }
    })
    .await
}

pub async fn logout<N: Notifier, P: PromptProvider>(ctx: &Context<N, P>) -> Result<()> {
    let invocation = ctx.invocation(["logout"]);
    ctx.run_and_notify(invocation, "Error logging out of Blink: ", |_| "Logged out of Blink".to_string())
        .await
}
