// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mlws values` - List every value of an enumeration

use anyhow::Result;
use tracing::debug;

use super::EnumKind;
use crate::output::{lines, OutputFormat};

pub fn render(kind: EnumKind, format: OutputFormat) -> Result<String> {
    let labels = kind.labels();
    match format {
        OutputFormat::Text => Ok(lines(&labels)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(&labels)?)),
    }
}

pub fn handle(kind: EnumKind, format: OutputFormat) -> Result<()> {
    debug!(%kind, %format, "listing values");
    print!("{}", render(kind, format)?);
    Ok(())
}

#[cfg(test)]
#[path = "values_tests.rs"]
mod tests;
