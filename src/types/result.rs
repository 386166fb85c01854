// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider-defined shipping cost payload

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shipping costs as returned by the payment provider
///
/// The shape is owned by the provider. The gateway relays it without inspecting it.
///
/// # Example
/// ```
/// use serde_json::json;
/// use shipping_gateway::ShippingCostResult;
///
/// let costs = ShippingCostResult::new(json!({ "amount": 500, "currency": "USD" }));
/// assert_eq!(costs.as_value()["currency"], "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingCostResult(Value);

impl ShippingCostResult {
    /// Wrap a provider payload
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// Borrow the raw payload
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the raw payload
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for ShippingCostResult {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
