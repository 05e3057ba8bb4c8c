// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod check;
pub mod values;

use clap::ValueEnum;
use mlws_core::{
    possible_state_values, possible_workspace_type_values, ParseEnumError, State, WorkspaceType,
};

/// Enumeration selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EnumKind {
    /// Registration lifecycle state
    State,
    /// Workspace pricing tier
    WorkspaceType,
}

mlws_core::simple_display! {
    EnumKind {
        State => "state",
        WorkspaceType => "workspace-type",
    }
}

impl EnumKind {
    /// Every label of the enumeration, in declaration order.
    pub fn labels(self) -> Vec<&'static str> {
        match self {
            EnumKind::State => possible_state_values().iter().map(|v| v.as_str()).collect(),
            EnumKind::WorkspaceType => {
                possible_workspace_type_values().iter().map(|v| v.as_str()).collect()
            }
        }
    }

    /// Parse `value` and return its canonical label.
    pub fn canonicalize(
        self,
        value: &str,
        ignore_case: bool,
    ) -> Result<&'static str, ParseEnumError> {
        match (self, ignore_case) {
            (EnumKind::State, false) => value.parse::<State>().map(State::as_str),
            (EnumKind::State, true) => State::parse_ignore_case(value).map(State::as_str),
            (EnumKind::WorkspaceType, false) => {
                value.parse::<WorkspaceType>().map(WorkspaceType::as_str)
            }
            (EnumKind::WorkspaceType, true) => {
                WorkspaceType::parse_ignore_case(value).map(WorkspaceType::as_str)
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
