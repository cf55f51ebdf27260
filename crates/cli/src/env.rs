// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;
use std::time::Duration;

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

/// Version string shown by `--version`: package version plus git hash.
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

/// Explicit config file: `BM_TOOLS_CONFIG`
pub fn config_path() -> Option<PathBuf> {
    std::env::var("BM_TOOLS_CONFIG").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Default config file: `<config_dir>/bm-tools/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bm-tools").join("config.toml"))
}

/// Program override: `BM_TOOLS_PROGRAM`
pub fn program() -> Option<String> {
    std::env::var("BM_TOOLS_PROGRAM").ok().filter(|s| !s.is_empty())
}

/// Timeout override in milliseconds: `BM_TOOLS_TIMEOUT_MS`
pub fn timeout() -> Option<Duration> {
    std::env::var("BM_TOOLS_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}
