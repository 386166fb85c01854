// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for shipping cost requests
//!
//! Region codes are carried verbatim. Validation belongs to the payment provider,
//! so an empty or malformed code is still a well-formed request here.

use serde::{Deserialize, Serialize};

/// Identifier assigned to each call of
/// [`ShippingCostGateway::fetch_shipping_costs`](crate::ShippingCostGateway::fetch_shipping_costs)
///
/// Ids are unique per gateway and increase monotonically from 1. Every emitted event
/// carries the id of the call that produced it, so concurrent lookups can be told apart.
///
/// # Example
/// ```
/// use shipping_gateway::RequestId;
///
/// let id = RequestId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    /// Wrap a raw id
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RequestId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A shipping cost lookup for one region
///
/// # Example
/// ```
/// use shipping_gateway::ShippingCostRequest;
///
/// let request = ShippingCostRequest::new("US", "CA");
/// assert_eq!(request.country_code(), "US");
/// assert_eq!(request.state_code(), "CA");
/// assert_eq!(request.to_string(), "US/CA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingCostRequest {
    country_code: String,
    state_code: String,
}

impl ShippingCostRequest {
    /// Create a request for the given country and state codes
    pub fn new(country_code: impl Into<String>, state_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            state_code: state_code.into(),
        }
    }

    /// Country code as supplied by the caller
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// State code as supplied by the caller (may be empty)
    pub fn state_code(&self) -> &str {
        &self.state_code
    }
}

impl std::fmt::Display for ShippingCostRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.country_code, self.state_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_camel_case_keys() {
        let request = ShippingCostRequest::new("US", "CA");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "countryCode": "US", "stateCode": "CA" })
        );
    }

    #[test]
    fn test_request_keeps_empty_codes_verbatim() {
        let request = ShippingCostRequest::new("ZZ", "");
        assert_eq!(request.country_code(), "ZZ");
        assert_eq!(request.state_code(), "");
        assert_eq!(request.to_string(), "ZZ/");
    }

    #[test]
    fn test_request_id_is_transparent_in_json() {
        let json = serde_json::to_string(&RequestId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_request_id_ordering() {
        assert!(RequestId::new(1) < RequestId::new(2));
    }
}
