// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `bm-tools create-interaction`

use std::fmt;

use anyhow::{anyhow, Result};
use bm_adapters::{Field, Form, Notifier, PromptProvider};
use clap::ValueEnum;

use super::Context;

#[cfg(test)]
#[path = "interaction_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InteractionType {
    #[default]
    Madl,
    Message,
}

impl InteractionType {
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionType::Madl => "madl",
            InteractionType::Message => "message",
        }
    }

    fn parse(value: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(value, true).map_err(|e| anyhow!("interaction type: {e}"))
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create a named interaction. The name goes to the tool on stdin.
///
/// With no name given both name and type are prompted for; a name without
/// a type uses the default type.
pub async fn create_interaction<N, P>(
    ctx: &Context<N, P>,
    name: Option<String>,
    kind: Option<InteractionType>,
) -> Result<()>
where
    N: Notifier,
    P: PromptProvider,
{
    let (name, kind) = match name {
        Some(name) => (name, kind.unwrap_or_default()),
        None => {
            let form = Form::new("Enter name for interaction")
                .field(Field::text("interactionName", "Interaction name"))
                .field(Field::select(
                    "interactionType",
                    "Interaction type",
                    [InteractionType::Madl.as_str(), InteractionType::Message.as_str()],
                ));
            let Some(values) = ctx.ask(&form).await? else {
                return Ok(());
            };
            let name = values.require("interactionName")?.to_string();
            let kind = InteractionType::parse(values.require("interactionType")?)?;
            (name, kind)
        }
    };

    let subcommand = ctx.settings.interaction_subcommand.clone();
    let invocation = ctx.invocation([subcommand, format!("--type={}", kind)]).with_input(name.as_str());
    ctx.run_and_notify(invocation, "Error creating interaction: ", |_| {
        format!("Interaction created: {}", name)
    })
    .await
}
