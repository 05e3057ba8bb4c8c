// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registration lifecycle state of a workspace.
//!
//! These are labels reported by the service, not a transition system: the
//! client never moves a workspace from one state to another.

crate::wire_enum! {
    /// Lifecycle status of a registered resource.
    pub enum State("state") {
        Deleted => "Deleted",
        Disabled => "Disabled",
        Enabled => "Enabled",
        Migrated => "Migrated",
        Registered => "Registered",
        Unregistered => "Unregistered",
        Updated => "Updated",
    }
}

/// All possible [`State`] values, in declaration order.
pub fn possible_state_values() -> &'static [State] {
    State::ALL
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
