//! Tracing span helpers for gateway operations.
//!
//! Telemetry is kept out of the business logic: each instrumented operation has a
//! span constructor here and the caller attaches it with [`tracing::Instrument`].
//!
//! ```rust,ignore
//! relay
//!     .run(request_id, request)
//!     .instrument(spans::fetch_shipping_costs(request_id, &request))
//!     .await;
//! ```

use tracing::{Level, Span};

use crate::types::{RequestId, ShippingCostRequest};

/// Create span covering one relay, from dispatch to event emission.
///
/// Parent: caller's span (or the serialized dispatcher span)
/// Children: provider_lookup span
#[inline]
pub(crate) fn fetch_shipping_costs(request_id: RequestId, request: &ShippingCostRequest) -> Span {
    tracing::span!(
        Level::INFO,
        "shipping_gateway.fetch_shipping_costs",
        request_id = %request_id,
        country_code = %request.country_code(),
        state_code = %request.state_code(),
    )
}

/// Create span for the call into the payment provider.
///
/// Parent: fetch_shipping_costs span
/// Children: provider's own spans
#[inline]
pub(crate) fn provider_lookup(request_id: RequestId) -> Span {
    tracing::debug_span!("shipping_gateway.provider_lookup", request_id = %request_id)
}

/// Create span for the worker that drains the serialized lookup queue.
///
/// Parent: None (lives as long as the gateway)
/// Children: fetch_shipping_costs spans, one per queued lookup
#[inline]
pub(crate) fn serialized_dispatcher() -> Span {
    tracing::debug_span!("shipping_gateway.serialized_dispatcher")
}
