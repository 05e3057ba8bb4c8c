// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

mlws_core::simple_display! {
    OutputFormat {
        Text => "text",
        Json => "json",
    }
}

/// Pick the effective format: explicit flag, then `MLWS_OUTPUT`, then text.
pub fn resolve_format(flag: Option<OutputFormat>) -> OutputFormat {
    flag.or_else(crate::env::output_format).unwrap_or_default()
}

/// Text output: one entry per line, trailing newline.
pub fn lines(entries: &[&str]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(entry);
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
