// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mlws check` - Validate a wire string against an enumeration

use anyhow::Result;
use mlws_core::ParseEnumError;
use serde::Serialize;
use tracing::debug;

use super::EnumKind;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

/// JSON body printed by `mlws check -o json`.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub kind: String,
    pub value: &'a str,
    pub valid: bool,
    pub canonical: Option<&'static str>,
}

impl<'a> CheckReport<'a> {
    pub fn new(
        kind: EnumKind,
        value: &'a str,
        result: &Result<&'static str, ParseEnumError>,
    ) -> Self {
        let canonical = result.as_ref().ok().copied();
        Self { kind: kind.to_string(), value, valid: canonical.is_some(), canonical }
    }
}

/// Stdout for a check. Text output is empty when the value is rejected.
pub fn render(
    kind: EnumKind,
    value: &str,
    result: &Result<&'static str, ParseEnumError>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match result {
            Ok(canonical) => format!("{canonical}\n"),
            Err(_) => String::new(),
        }),
        OutputFormat::Json => {
            let report = CheckReport::new(kind, value, result);
            Ok(format!("{}\n", serde_json::to_string(&report)?))
        }
    }
}

pub fn handle(kind: EnumKind, value: &str, ignore_case: bool, format: OutputFormat) -> Result<()> {
    debug!(%kind, value, ignore_case, %format, "checking value");
    let result = kind.canonicalize(value, ignore_case);
    print!("{}", render(kind, value, &result, format)?);

    match result {
        Ok(canonical) => {
            debug!(canonical, "value accepted");
            Ok(())
        }
        Err(err) => {
            debug!(error = %err, "value rejected");
            Err(ExitError::from(err).into())
        }
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
