// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

#[test]
#[serial]
fn program_ignores_empty_value() {
    std::env::set_var("BM_TOOLS_PROGRAM", "");
    assert_eq!(program(), None);
    std::env::set_var("BM_TOOLS_PROGRAM", "/opt/bm/bin/bm");
    assert_eq!(program().as_deref(), Some("/opt/bm/bin/bm"));
    std::env::remove_var("BM_TOOLS_PROGRAM");
}

#[yare::parameterized(
    millis  = { "1500", Some(Duration::from_millis(1500)) },
    garbage = { "soon", None },
    negative = { "-1", None },
)]
#[serial]
fn timeout_parses_millis(value: &str, expected: Option<Duration>) {
    std::env::set_var("BM_TOOLS_TIMEOUT_MS", value);
    assert_eq!(timeout(), expected);
    std::env::remove_var("BM_TOOLS_TIMEOUT_MS");
}

#[test]
#[serial]
fn config_path_from_env() {
    std::env::set_var("BM_TOOLS_CONFIG", "/tmp/bm-tools.toml");
    assert_eq!(config_path(), Some(PathBuf::from("/tmp/bm-tools.toml")));
    std::env::remove_var("BM_TOOLS_CONFIG");
    assert_eq!(config_path(), None);
}

#[test]
fn long_version_starts_with_package_version() {
    assert!(LONG_VERSION.starts_with(env!("CARGO_PKG_VERSION")));
}
