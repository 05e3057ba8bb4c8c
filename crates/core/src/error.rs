// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised when reading enumeration labels from the wire.

use thiserror::Error;

/// A string did not match any label of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?} (expected one of: {})", .expected.join(", "))]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static [&'static str],
}

impl ParseEnumError {
    pub fn new(
        kind: &'static str,
        value: impl Into<String>,
        expected: &'static [&'static str],
    ) -> Self {
        Self { kind, value: value.into(), expected }
    }

    /// Name of the enumeration that rejected the input (e.g. `"state"`)
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input, verbatim
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Legal labels in declaration order
    pub fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
