//! Constants shared across the gateway

/// Name of the event emitted when a lookup succeeds
pub const SHIPPING_COSTS_RETRIEVED: &str = "shipping_costs_retrieved";

/// Name of the event emitted when a lookup fails
pub const SHIPPING_COSTS_ERROR: &str = "shipping_costs_error";

/// Default number of events an [`EventBus`](crate::EventBus) buffers per subscriber
pub const DEFAULT_EVENT_BUS_CAPACITY: usize = 64;
