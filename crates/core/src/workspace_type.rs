// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pricing tier of a workspace.

crate::wire_enum! {
    /// Commercial classification of a workspace.
    pub enum WorkspaceType("workspace type") {
        Anonymous => "Anonymous",
        Free => "Free",
        PaidPremium => "PaidPremium",
        PaidStandard => "PaidStandard",
        Production => "Production",
    }
}

/// All possible [`WorkspaceType`] values, in declaration order.
pub fn possible_workspace_type_values() -> &'static [WorkspaceType] {
    WorkspaceType::ALL
}

#[cfg(test)]
#[path = "workspace_type_tests.rs"]
mod tests;
