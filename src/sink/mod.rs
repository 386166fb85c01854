// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Event sinks
//!
//! The gateway is handed an [`EventSink`] at construction time and pushes every
//! [`ShippingCostEvent`] into it. Sinks are called from whichever task finished the
//! lookup, so they must be `Send + Sync` and must not block.
//!
//! Provided sinks:
//!
//! - `tokio::sync::mpsc::UnboundedSender<ShippingCostEvent>` - single consumer
//! - [`FnSink`] - forwards to a closure, handy for host bridges and tests
//! - [`EventBus`] - broadcast with subscriptions keyed by [`EventName`](crate::EventName)

mod bus;

use tokio::sync::mpsc;

use crate::errors::EmitError;
use crate::event::ShippingCostEvent;

pub use bus::{EventBus, EventSubscription};

/// Destination for shipping cost events
pub trait EventSink: Send + Sync {
    /// Deliver one event
    ///
    /// Returning an error only causes the gateway to log the dropped event.
    fn emit(&self, event: ShippingCostEvent) -> Result<(), EmitError>;
}

impl EventSink for mpsc::UnboundedSender<ShippingCostEvent> {
    fn emit(&self, event: ShippingCostEvent) -> Result<(), EmitError> {
        self.send(event).map_err(|_| EmitError::Closed)
    }
}

impl<T> EventSink for std::sync::Arc<T>
where
    T: EventSink + ?Sized,
{
    fn emit(&self, event: ShippingCostEvent) -> Result<(), EmitError> {
        (**self).emit(event)
    }
}

/// Sink that forwards every event to a closure
///
/// # Example
///
/// ```rust
/// use shipping_gateway::{FnSink, ShippingCostEvent};
///
/// let sink = FnSink::new(|event: ShippingCostEvent| {
///     println!("{}: {}", event.name(), event.to_json())
/// });
/// ```
pub struct FnSink<F> {
    handler: F,
}

impl<F> FnSink<F>
where
    F: Fn(ShippingCostEvent) + Send + Sync,
{
    /// Wrap `handler`
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: Fn(ShippingCostEvent) + Send + Sync,
{
    fn emit(&self, event: ShippingCostEvent) -> Result<(), EmitError> {
        (self.handler)(event);
        Ok(())
    }
}

impl<F> std::fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}
