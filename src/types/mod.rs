// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for shipping cost lookups
//!
//! - [`ShippingCostRequest`]: the region being looked up
//! - [`RequestId`]: per-call correlation id carried on every event
//! - [`ShippingCostResult`]: opaque provider payload

mod request;
mod result;

pub use request::{RequestId, ShippingCostRequest};
pub use result::ShippingCostResult;
