// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML configuration with environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bm_runner::CommandRunner;
use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

use crate::env;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

/// Where notifications are shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NotifierKind {
    #[default]
    Terminal,
    Desktop,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Executable of the bm tool.
    pub program: String,
    /// Arguments placed before every subcommand.
    pub base_args: Vec<String>,
    pub timeout_ms: Option<u64>,
    /// Report stderr of successful runs as a warning.
    pub stderr_on_success: bool,
    pub notifier: NotifierKind,
    /// `bmp` subcommand that creates an interaction.
    pub interaction_subcommand: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: "bm".to_string(),
            base_args: vec!["bmp".to_string()],
            timeout_ms: None,
            stderr_on_success: false,
            notifier: NotifierKind::Terminal,
            interaction_subcommand: "login".to_string(),
        }
    }
}

impl Config {
    /// Load from `explicit`, else `BM_TOOLS_CONFIG`, else the default path.
    ///
    /// Only the default path may be missing; an explicitly named file must
    /// exist. Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match explicit.map(Path::to_path_buf).or_else(env::config_path) {
            Some(path) => Self::read(&path)?,
            None => match env::default_config_path().filter(|path| path.exists()) {
                Some(path) => Self::read(&path)?,
                None => Self::default(),
            },
        };
        Ok(config.with_env_overrides())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::parse(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(program) = env::program() {
            self.program = program;
        }
        if let Some(timeout) = env::timeout() {
            self.timeout_ms = Some(timeout.as_millis() as u64);
        }
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn runner(&self) -> CommandRunner {
        let runner = CommandRunner::new().stderr_on_success(self.stderr_on_success);
        match self.timeout() {
            Some(timeout) => runner.timeout(timeout),
            None => runner,
        }
    }
}
