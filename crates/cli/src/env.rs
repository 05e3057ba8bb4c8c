// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use clap::ValueEnum;

use crate::output::OutputFormat;

/// Filter used when `MLWS_LOG` is unset or empty
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// `MLWS_IGNORE_CASE=1` makes `check` case-insensitive unless `--strict` is given.
pub fn ignore_case() -> bool {
    std::env::var("MLWS_IGNORE_CASE").is_ok_and(|v| v == "1")
}

/// Default output format from `MLWS_OUTPUT` (`text` or `json`, any case).
/// Unrecognized values are ignored.
pub fn output_format() -> Option<OutputFormat> {
    std::env::var("MLWS_OUTPUT").ok().and_then(|s| OutputFormat::from_str(&s, true).ok())
}

/// Tracing filter directive: MLWS_LOG > "warn"
pub fn log_filter() -> String {
    std::env::var("MLWS_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
