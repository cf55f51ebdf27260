// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! bm-tools: run `bm` tasks and report the outcome as a notification.

mod commands;
mod config;
mod env;
mod exit_error;
mod notifier;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use bm_adapters::LinePrompt;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::{Context, InteractionType, Settings};
use crate::config::{Config, NotifierKind};
use crate::exit_error::ExitError;
use crate::notifier::CliNotifier;

#[derive(Parser)]
#[command(name = "bm-tools", version, long_version = env::LONG_VERSION, about = "Run bm tasks and report the outcome")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Project directory the tool runs in (default: current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Where to show results (overrides the config file)
    #[arg(long, value_enum, global = true)]
    notifier: Option<NotifierKind>,

    /// Config file (default: BM_TOOLS_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Set the answerSpace to work against
    Scope {
        /// Prompted for when omitted
        answerspace: Option<String>,
    },
    /// Log in with an authentication token (prompted, sent on stdin)
    Login,
    /// Log out
    Logout,
    /// Pull code from the current answerSpace
    Pull,
    /// Deploy to the current answerSpace
    Deploy,
    /// Create a new interaction
    CreateInteraction {
        /// Interaction name; name and type are prompted for when omitted
        name: Option<String>,
        /// Interaction type
        #[arg(long = "type", value_enum)]
        kind: Option<InteractionType>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(kind) = cli.notifier {
        config.notifier = kind;
    }
    let cwd = match cli.cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    tracing::debug!(?config, cwd = %cwd.display(), "resolved settings");

    let ctx = Context::new(
        config.runner(),
        CliNotifier::new(config.notifier),
        LinePrompt::stdio(),
        Settings::from_config(&config, cwd),
    );

    match cli.command {
        Command::Scope { answerspace } => commands::scope(&ctx, answerspace).await,
        Command::Login => commands::login(&ctx).await,
        Command::Logout => commands::logout(&ctx).await,
        Command::Pull => commands::pull(&ctx).await,
        Command::Deploy => commands::deploy(&ctx).await,
        Command::CreateInteraction { name, kind } => {
            commands::create_interaction(&ctx, name, kind).await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        let code = match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("error: {}", exit.message);
                }
                exit.code
            }
            None => {
                tracing::debug!("command failed: {:?}", e);
                eprintln!("error: {:#}", e);
                1
            }
        };
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[yare::parameterized(
        scope_arg   = { &["bm-tools", "scope", "demo"] },
        login       = { &["bm-tools", "login"] },
        interaction = { &["bm-tools", "create-interaction", "greeter", "--type", "message"] },
        global_cwd  = { &["bm-tools", "deploy", "-C", "/tmp", "--notifier", "desktop"] },
    )]
    fn parses(argv: &[&str]) {
        assert!(Cli::try_parse_from(argv).is_ok());
    }

    #[test]
    fn unknown_interaction_type_is_rejected() {
        assert!(Cli::try_parse_from(["bm-tools", "create-interaction", "x", "--type", "chat"]).is_err());
    }
}
