// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for addressing outlets and describing operations.
//!
//! These types enforce the switch's constraints at construction time:
//!
//! - [`Outlet`]: outlet number (1-[`OUTLET_COUNT`])
//! - [`OutletCode`]: a single outlet or the all-outlets wildcard `a`
//! - [`Operation`]: `ON`, `OFF` or `CCL`
//! - [`CycleMethod`]: client-driven or device-driven power cycling

mod operation;
mod outlet;

pub use operation::{CycleMethod, Operation, is_valid_operation};
pub use outlet::{OUTLET_COUNT, Outlet, OutletCode, is_valid_outlet};
