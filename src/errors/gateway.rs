//! Error types for gateway construction.

/// Errors that can occur when building a [`ShippingCostGateway`](crate::ShippingCostGateway).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The gateway was constructed outside a Tokio runtime.
    ///
    /// Lookups are scheduled on the runtime that is current at construction time,
    /// so one must exist.
    #[error("Shipping gateway must be constructed within a Tokio runtime")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
