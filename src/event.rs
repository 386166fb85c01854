// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Events published to the embedding application
//!
//! Every call to [`fetch_shipping_costs`](crate::ShippingCostGateway::fetch_shipping_costs)
//! produces exactly one [`ShippingCostEvent`]: either `shipping_costs_retrieved` or
//! `shipping_costs_error`. Events serialize as internally tagged JSON so host bridges
//! can forward them without further mapping:
//!
//! ```json
//! {
//!   "event": "shipping_costs_retrieved",
//!   "request_id": 1,
//!   "request": { "countryCode": "US", "stateCode": "CA" },
//!   "costs": { "amount": 500, "currency": "USD" }
//! }
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::constants::{SHIPPING_COSTS_ERROR, SHIPPING_COSTS_RETRIEVED};
use crate::errors::LookupError;
use crate::types::{RequestId, ShippingCostRequest, ShippingCostResult};

/// Name under which an event is published
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    /// `shipping_costs_retrieved`
    ShippingCostsRetrieved,
    /// `shipping_costs_error`
    ShippingCostsError,
}

impl EventName {
    /// Wire name of the event
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventName::ShippingCostsRetrieved => SHIPPING_COSTS_RETRIEVED,
            EventName::ShippingCostsError => SHIPPING_COSTS_ERROR,
        }
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SHIPPING_COSTS_RETRIEVED => Ok(EventName::ShippingCostsRetrieved),
            SHIPPING_COSTS_ERROR => Ok(EventName::ShippingCostsError),
            other => Err(format!("unknown event name: {other}")),
        }
    }
}

/// Error payload of a `shipping_costs_error` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingCostFailure {
    /// Machine-readable code, see [`LookupError::code`]
    pub code: String,
    /// Provider detail, see [`LookupError::message`]
    pub message: String,
}

impl From<&LookupError> for ShippingCostFailure {
    fn from(error: &LookupError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.message(),
        }
    }
}

impl From<LookupError> for ShippingCostFailure {
    fn from(error: LookupError) -> Self {
        Self::from(&error)
    }
}

/// Outcome of one shipping cost lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum ShippingCostEvent {
    /// The provider returned shipping costs
    #[serde(rename = "shipping_costs_retrieved")]
    Retrieved {
        /// Id returned by the call that produced this event
        request_id: RequestId,
        /// The region that was looked up
        request: ShippingCostRequest,
        /// Provider payload, unchanged
        costs: ShippingCostResult,
    },

    /// The lookup failed
    #[serde(rename = "shipping_costs_error")]
    Error {
        /// Id returned by the call that produced this event
        request_id: RequestId,
        /// The region that was looked up
        request: ShippingCostRequest,
        /// What went wrong
        error: ShippingCostFailure,
    },
}

impl ShippingCostEvent {
    /// Build the event for a finished lookup
    pub fn from_outcome(
        request_id: RequestId,
        request: ShippingCostRequest,
        outcome: Result<ShippingCostResult, LookupError>,
    ) -> Self {
        match outcome {
            Ok(costs) => ShippingCostEvent::Retrieved {
                request_id,
                request,
                costs,
            },
            Err(error) => ShippingCostEvent::Error {
                request_id,
                request,
                error: error.into(),
            },
        }
    }

    /// Name this event is published under
    pub fn name(&self) -> EventName {
        match self {
            ShippingCostEvent::Retrieved { .. } => EventName::ShippingCostsRetrieved,
            ShippingCostEvent::Error { .. } => EventName::ShippingCostsError,
        }
    }

    /// Id of the call that produced this event
    pub fn request_id(&self) -> RequestId {
        match self {
            ShippingCostEvent::Retrieved { request_id, .. }
            | ShippingCostEvent::Error { request_id, .. } => *request_id,
        }
    }

    /// The region that was looked up
    pub fn request(&self) -> &ShippingCostRequest {
        match self {
            ShippingCostEvent::Retrieved { request, .. }
            | ShippingCostEvent::Error { request, .. } => request,
        }
    }

    /// Provider payload, if the lookup succeeded
    pub fn costs(&self) -> Option<&ShippingCostResult> {
        match self {
            ShippingCostEvent::Retrieved { costs, .. } => Some(costs),
            ShippingCostEvent::Error { .. } => None,
        }
    }

    /// Failure detail, if the lookup failed
    pub fn failure(&self) -> Option<&ShippingCostFailure> {
        match self {
            ShippingCostEvent::Retrieved { .. } => None,
            ShippingCostEvent::Error { error, .. } => Some(error),
        }
    }

    /// Serialize to the JSON shape host bridges forward
    pub fn to_json(&self) -> serde_json::Value {
        // Every field serializes to a JSON value; this cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
