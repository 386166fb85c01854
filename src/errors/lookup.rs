//! Error types for shipping cost lookups.
//!
//! The taxonomy mirrors what payment providers report. The gateway adds a few
//! variants of its own (timeouts, panics inside the provider, a stopped dispatcher)
//! so that every failure can be relayed through the same error event.

use std::time::Duration;

/// Errors that can occur while looking up shipping costs.
///
/// Providers return these from
/// [`ShippingCostProvider::lookup_shipping_costs`](crate::ShippingCostProvider::lookup_shipping_costs).
/// None of them reach callers of
/// [`fetch_shipping_costs`](crate::ShippingCostGateway::fetch_shipping_costs) directly;
/// each is converted into a `shipping_costs_error` event.
///
/// # Examples
///
/// ```rust
/// use shipping_gateway::LookupError;
///
/// let error = LookupError::unsupported_region("unsupported region");
/// assert_eq!(error.code(), "unsupported_region");
/// assert_eq!(error.message(), "unsupported region");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The provider could not be reached.
    #[error("Network failure: {0}")]
    Network(String),

    /// The provider rejected the country or state code.
    #[error("Unsupported region: {0}")]
    UnsupportedRegion(String),

    /// The region is valid but no shipping methods are offered.
    #[error("No shipping options available: {0}")]
    NoShippingOptions(String),

    /// The user dismissed an interactive provider flow.
    #[error("Lookup cancelled by user")]
    Cancelled,

    /// The provider did not answer within the configured lookup timeout.
    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The provider panicked or otherwise failed unexpectedly.
    #[error("Internal provider failure: {0}")]
    Internal(String),

    /// The serialized dispatcher is no longer running.
    #[error("Shipping gateway dispatcher is unavailable")]
    Unavailable,

    /// Any other provider-defined failure.
    #[error("Provider error {code}: {message}")]
    Provider {
        /// Provider-specific error code
        code: String,
        /// Provider-supplied description
        message: String,
    },
}

impl LookupError {
    /// Create a `Network` error.
    pub fn network(details: impl Into<String>) -> Self {
        LookupError::Network(details.into())
    }

    /// Create an `UnsupportedRegion` error.
    pub fn unsupported_region(details: impl Into<String>) -> Self {
        LookupError::UnsupportedRegion(details.into())
    }

    /// Create a `NoShippingOptions` error.
    pub fn no_shipping_options(details: impl Into<String>) -> Self {
        LookupError::NoShippingOptions(details.into())
    }

    /// Create an `Internal` error.
    pub fn internal(details: impl Into<String>) -> Self {
        LookupError::Internal(details.into())
    }

    /// Create a provider-defined error.
    pub fn provider(code: impl Into<String>, message: impl Into<String>) -> Self {
        LookupError::Provider {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code used in error events.
    pub fn code(&self) -> &str {
        match self {
            LookupError::Network(_) => "network",
            LookupError::UnsupportedRegion(_) => "unsupported_region",
            LookupError::NoShippingOptions(_) => "no_shipping_options",
            LookupError::Cancelled => "cancelled",
            LookupError::Timeout(_) => "timeout",
            LookupError::Internal(_) => "internal",
            LookupError::Unavailable => "unavailable",
            LookupError::Provider { code, .. } => code,
        }
    }

    /// Human-readable detail used in error events.
    ///
    /// Provider-supplied details are returned verbatim.
    pub fn message(&self) -> String {
        match self {
            LookupError::Network(details)
            | LookupError::UnsupportedRegion(details)
            | LookupError::NoShippingOptions(details)
            | LookupError::Internal(details) => details.clone(),
            LookupError::Provider { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
