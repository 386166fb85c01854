// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Relay for payment-provider shipping cost lookups.
//!
//! A [`ShippingCostGateway`] takes a country/state pair, delegates the lookup to a
//! [`ShippingCostProvider`], and publishes the outcome to an [`EventSink`] as exactly
//! one named event:
//!
//! | Event | Payload |
//! |---|---|
//! | `shipping_costs_retrieved` | provider payload ([`ShippingCostResult`]) |
//! | `shipping_costs_error` | `{ code, message }` ([`ShippingCostFailure`]) |
//!
//! Every event carries the [`RequestId`] returned by the call that produced it.

mod config;
mod errors;
mod event;
mod gateway;
mod provider;
mod sink;
mod spans;
mod types;

pub use config::constants;
pub use config::{DispatchMode, GatewayConfig, GatewayConfigBuilder};
pub use errors::{EmitError, GatewayError, LookupError};
pub use event::{EventName, ShippingCostEvent, ShippingCostFailure};
pub use gateway::ShippingCostGateway;
pub use provider::ShippingCostProvider;
pub use sink::{EventBus, EventSink, EventSubscription, FnSink};
pub use types::{RequestId, ShippingCostRequest, ShippingCostResult};
