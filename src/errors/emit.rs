//! Error types for event emission.

/// Errors returned by an [`EventSink`](crate::EventSink) that could not deliver an event.
///
/// The gateway logs these and carries on. They are never surfaced to callers of
/// [`fetch_shipping_costs`](crate::ShippingCostGateway::fetch_shipping_costs).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// The receiving side of the sink has been dropped.
    #[error("Event subscriber has been dropped")]
    Closed,

    /// The event bus has no live subscriptions.
    #[error("No subscribers for event {event}")]
    NoSubscribers {
        /// Name of the event that was dropped
        event: &'static str,
    },
}
