// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bm-tools scope | pull | deploy`

use anyhow::Result;
use bm_adapters::{Field, Form, Notifier, PromptProvider};

use super::Context;

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;

/// Set the answerSpace the tool works against, prompting if not given.
pub async fn scope<N, P>(ctx: &Context<N, P>, answerspace: Option<String>) -> Result<()>
where
    N: Notifier,
    P: PromptProvider,
{
    let answerspace = match answerspace {
        Some(answerspace) => answerspace,
        None => {
            let form = Form::new("Which answerSpace to use?")
                .field(Field::text("answerspace", "Answerspace"));
            let Some(values) = ctx.ask(&form).await? else {
                return Ok(());
            };
            values.require("answerspace")?.to_string()
        }
    };

    let invocation = ctx.invocation(["scope", answerspace.as_str()]);
    ctx.run_and_notify(invocation, "Error setting scope: ", |_| {
        format!("Scope set to: {}", answerspace)
    })
    .await
}

pub async fn pull<N: Notifier, P: PromptProvider>(ctx: &Context<N, P>) -> Result<()> {
    let invocation = ctx.invocation(["pull"]);
    ctx.run_and_notify(invocation, "Error pulling code from Blink: ", |_| "Pull successful".to_string())
        .await
}

pub async fn deploy<N: Notifier, P: PromptProvider>(ctx: &Context<N, P>) -> Result<()> {
    let invocation = ctx.invocation(["deploy"]);
    ctx.run_and_notify(invocation, "Error deploying to Blink: ", |_| "Deploy successful".to_string())
        .await
}
