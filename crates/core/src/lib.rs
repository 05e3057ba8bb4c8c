// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mlws-core: Machine Learning workspace enumerations (API version 2016-04-01)

pub mod macros;

pub mod error;
pub mod state;
pub mod workspace_type;

pub use error::ParseEnumError;
pub use state::{possible_state_values, State};
pub use workspace_type::{possible_workspace_type_values, WorkspaceType};
