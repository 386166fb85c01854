//! Configuration for the shipping gateway
//!
//! # Example: Using defaults
//!
//! ```rust
//! use shipping_gateway::{DispatchMode, GatewayConfig};
//!
//! // Concurrent dispatch, no lookup timeout
//! let config = GatewayConfig::default();
//! assert_eq!(config.dispatch_mode, DispatchMode::Concurrent);
//! assert_eq!(config.lookup_timeout, None);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use shipping_gateway::GatewayConfigBuilder;
//! use std::time::Duration;
//!
//! let config = GatewayConfigBuilder::new()
//!     .serialized()
//!     .lookup_timeout(Duration::from_secs(10))
//!     .build();
//! ```

use std::time::Duration;

pub mod constants;

use constants::DEFAULT_EVENT_BUS_CAPACITY;

/// How lookups are scheduled relative to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Each lookup runs in its own task. Completion order is not guaranteed, so
    /// consumers correlate events by [`RequestId`](crate::RequestId).
    #[default]
    Concurrent,

    /// Lookups run one at a time on a single worker, in call order. Events are
    /// emitted in the order `fetch_shipping_costs` was called.
    Serialized,
}

/// Configuration for a [`ShippingCostGateway`](crate::ShippingCostGateway)
///
/// Use [`GatewayConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Scheduling of lookups
    /// Default: [`DispatchMode::Concurrent`]
    pub dispatch_mode: DispatchMode,

    /// Upper bound on a single provider lookup
    /// Default: None (wait for the provider indefinitely)
    pub lookup_timeout: Option<Duration>,

    /// Buffer size of event buses created with [`GatewayConfig::event_bus`]
    ///
    /// A convenience for constructing the bus alongside the gateway; the gateway
    /// itself never reads it. Buses built with [`EventBus::new`](crate::EventBus::new)
    /// take their capacity directly.
    /// Default: 64
    pub event_bus_capacity: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            dispatch_mode: DispatchMode::Concurrent,
            lookup_timeout: None,
            event_bus_capacity: DEFAULT_EVENT_BUS_CAPACITY,
        }
    }
}

impl GatewayConfig {
    /// Create config that serializes lookups
    ///
    /// # Example
    ///
    /// ```rust
    /// use shipping_gateway::{DispatchMode, GatewayConfig};
    ///
    /// let config = GatewayConfig::serialized();
    /// assert_eq!(config.dispatch_mode, DispatchMode::Serialized);
    /// ```
    pub fn serialized() -> Self {
        Self {
            dispatch_mode: DispatchMode::Serialized,
            ..Self::default()
        }
    }

    /// Create an [`EventBus`](crate::EventBus) sized by this configuration
    pub fn event_bus(&self) -> crate::EventBus {
        crate::EventBus::new(self.event_bus_capacity)
    }
}

/// Builder for [`GatewayConfig`]
///
/// # Example
///
/// ```rust
/// use shipping_gateway::{DispatchMode, GatewayConfigBuilder};
/// use std::time::Duration;
///
/// let config = GatewayConfigBuilder::new()
///     .dispatch_mode(DispatchMode::Serialized)
///     .lookup_timeout(Duration::from_secs(5))
///     .event_bus_capacity(16)
///     .build();
///
/// assert_eq!(config.lookup_timeout, Some(Duration::from_secs(5)));
/// ```
#[derive(Debug, Default)]
pub struct GatewayConfigBuilder {
    config: GatewayConfig,
}

impl GatewayConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dispatch mode
    pub fn dispatch_mode(mut self, mode: DispatchMode) -> Self {
        self.config.dispatch_mode = mode;
        self
    }

    /// Shorthand for `dispatch_mode(DispatchMode::Serialized)`
    pub fn serialized(self) -> Self {
        self.dispatch_mode(DispatchMode::Serialized)
    }

    /// Bound each provider lookup by `timeout`
    pub fn lookup_timeout(mut self, timeout: Duration) -> Self {
        self.config.lookup_timeout = Some(timeout);
        self
    }

    /// Wait for the provider indefinitely
    pub fn no_lookup_timeout(mut self) -> Self {
        self.config.lookup_timeout = None;
        self
    }

    /// Set the event bus buffer size (clamped to at least 1)
    pub fn event_bus_capacity(mut self, capacity: usize) -> Self {
        self.config.event_bus_capacity = capacity.max(1);
        self
    }

    /// Build the configuration
    pub fn build(self) -> GatewayConfig {
        self.config
    }
}
