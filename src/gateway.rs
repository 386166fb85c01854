// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shipping cost gateway
//!
//! [`ShippingCostGateway`] accepts a country/state pair, asks the configured
//! [`ShippingCostProvider`] for shipping costs, and publishes the outcome to an
//! [`EventSink`]. Callers never see a return value from the lookup itself; the
//! result arrives as exactly one `shipping_costs_retrieved` or `shipping_costs_error`
//! event.
//!
//! # Example
//!
//! ```rust,ignore
//! use shipping_gateway::{EventBus, EventName, ShippingCostGateway};
//!
//! let bus = EventBus::default();
//! let mut retrieved = bus.subscribe(EventName::ShippingCostsRetrieved);
//!
//! let gateway = ShippingCostGateway::new(provider, bus.clone())?;
//! let request_id = gateway.fetch_shipping_costs("US", "CA");
//!
//! let event = retrieved.recv().await.expect("bus open");
//! assert_eq!(event.request_id(), request_id);
//! ```

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn, Instrument};

use crate::config::{DispatchMode, GatewayConfig};
use crate::errors::{EmitError, GatewayError, LookupError};
use crate::event::ShippingCostEvent;
use crate::provider::ShippingCostProvider;
use crate::sink::EventSink;
use crate::spans;
use crate::types::{RequestId, ShippingCostRequest, ShippingCostResult};

/// Relays shipping cost lookups from the embedding application to a payment provider
///
/// The gateway is `Send + Sync`; share it behind an `Arc` if several tasks issue
/// lookups. Dropping it does not cancel lookups that are already dispatched: their
/// events are still emitted.
pub struct ShippingCostGateway {
    relay: Arc<Relay>,
    config: GatewayConfig,
    next_request_id: AtomicU64,
    dispatcher: Dispatcher,
}

/// Everything a dispatched lookup needs, shared between tasks
struct Relay {
    provider: Arc<dyn ShippingCostProvider>,
    sink: Arc<dyn EventSink>,
    lookup_timeout: Option<Duration>,
}

enum Dispatcher {
    Concurrent(Handle),
    Serialized(mpsc::UnboundedSender<PendingLookup>),
}

/// One dispatched lookup that still owes its event
///
/// Dropped before [`PendingLookup::run`] publishes (task cancelled, runtime shut down,
/// queue discarded), it emits an `unavailable` error event instead.
struct PendingLookup {
    relay: Arc<Relay>,
    request_id: RequestId,
    request: ShippingCostRequest,
    resolved: bool,
}

impl ShippingCostGateway {
    /// Create a gateway with the default configuration
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NoRuntime`] when called outside a Tokio runtime.
    pub fn new<P, S>(provider: P, sink: S) -> Result<Self, GatewayError>
    where
        P: ShippingCostProvider + 'static,
        S: EventSink + 'static,
    {
        Self::with_config(provider, sink, GatewayConfig::default())
    }

    /// Create a gateway with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NoRuntime`] when called outside a Tokio runtime.
    pub fn with_config<P, S>(
        provider: P,
        sink: S,
        config: GatewayConfig,
    ) -> Result<Self, GatewayError>
    where
        P: ShippingCostProvider + 'static,
        S: EventSink + 'static,
    {
        Self::from_shared(Arc::new(provider), Arc::new(sink), config)
    }

    /// Create a gateway from collaborators that are already shared
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NoRuntime`] when called outside a Tokio runtime.
    pub fn from_shared(
        provider: Arc<dyn ShippingCostProvider>,
        sink: Arc<dyn EventSink>,
        config: GatewayConfig,
    ) -> Result<Self, GatewayError> {
        let handle = Handle::try_current()?;

        let relay = Arc::new(Relay {
            provider,
            sink,
            lookup_timeout: config.lookup_timeout,
        });

        let dispatcher = match config.dispatch_mode {
            DispatchMode::Concurrent => Dispatcher::Concurrent(handle),
            DispatchMode::Serialized => {
                Dispatcher::Serialized(spawn_serialized_dispatcher(&handle))
            }
        };

        info!(
            dispatch_mode = ?config.dispatch_mode,
            lookup_timeout = ?config.lookup_timeout,
            "Shipping cost gateway ready"
        );

        Ok(Self {
            relay,
            config,
            next_request_id: AtomicU64::new(1),
            dispatcher,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Request shipping costs for a country/state pair
    ///
    /// Returns immediately with the id that the resulting event will carry. The
    /// lookup runs in the background and exactly one event is emitted for it.
    /// Codes are passed to the provider verbatim, so empty or malformed codes
    /// surface as whatever error event the provider reports.
    ///
    /// This method never fails and never panics.
    pub fn fetch_shipping_costs(
        &self,
        country_code: impl Into<String>,
        state_code: impl Into<String>,
    ) -> RequestId {
        let request = ShippingCostRequest::new(country_code, state_code);
        let request_id = RequestId::new(self.next_request_id.fetch_add(1, Ordering::Relaxed));

        info!(
            request_id = %request_id,
            region = %request,
            "Dispatching shipping cost lookup"
        );

        let span = spans::fetch_shipping_costs(request_id, &request);
        let pending = PendingLookup {
            relay: Arc::clone(&self.relay),
            request_id,
            request,
            resolved: false,
        };

        // A task spawned onto a shut-down runtime, or a lookup refused by a stopped
        // worker, is dropped here and fails through PendingLookup's drop.
        match &self.dispatcher {
            Dispatcher::Concurrent(handle) => {
                handle.spawn(pending.run().instrument(span));
            }
            Dispatcher::Serialized(queue) => {
                if queue.send(pending).is_err() {
                    warn!(request_id = %request_id, "Serialized dispatcher stopped, failing lookup");
                }
            }
        }

        request_id
    }
}

impl std::fmt::Debug for ShippingCostGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShippingCostGateway")
            .field("config", &self.config)
            .field("next_request_id", &self.next_request_id)
            .finish_non_exhaustive()
    }
}

/// Spawn the worker that runs queued lookups one at a time, in order.
///
/// The worker exits once the gateway (the only sender) is dropped and the queue is drained.
fn spawn_serialized_dispatcher(handle: &Handle) -> mpsc::UnboundedSender<PendingLookup> {
    let (tx, mut rx) = mpsc::unbounded_channel::<PendingLookup>();

    handle.spawn(
        async move {
            while let Some(pending) = rx.recv().await {
                let span = spans::fetch_shipping_costs(pending.request_id, &pending.request);
                pending.run().instrument(span).await;
            }
            debug!("Serialized dispatcher drained, exiting");
        }
        .instrument(spans::serialized_dispatcher()),
    );

    tx
}

impl PendingLookup {
    /// Perform the lookup and emit its event
    async fn run(mut self) {
        let request_id = self.request_id;
        let outcome = self
            .relay
            .lookup(&self.request)
            .instrument(spans::provider_lookup(request_id))
            .await;

        match &outcome {
            Ok(_) => debug!(request_id = %request_id, "Shipping costs retrieved"),
            Err(error) => warn!(
                request_id = %request_id,
                code = error.code(),
                error = %error,
                "Shipping cost lookup failed"
            ),
        }

        self.resolve(outcome);
    }

    fn resolve(&mut self, outcome: Result<ShippingCostResult, LookupError>) {
        // Marked first so a panicking sink cannot trigger a second event from drop.
        self.resolved = true;
        self.relay.publish(ShippingCostEvent::from_outcome(
            self.request_id,
            self.request.clone(),
            outcome,
        ));
    }
}

impl Drop for PendingLookup {
    fn drop(&mut self) {
        if self.resolved {
            return;
        }
        warn!(request_id = %self.request_id, "Lookup discarded before completion, failing it");
        self.resolve(Err(LookupError::Unavailable));
    }
}

impl Relay {

    /// Call the provider, converting panics and timeouts into lookup errors
    async fn lookup(
        &self,
        request: &ShippingCostRequest,
    ) -> Result<ShippingCostResult, LookupError> {
        let call = AssertUnwindSafe(self.provider.lookup_shipping_costs(request)).catch_unwind();

        let caught = match self.lookup_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(caught) => caught,
                Err(_) => return Err(LookupError::Timeout(limit)),
            },
            None => call.await,
        };

        caught.unwrap_or_else(|panic| Err(LookupError::internal(panic_message(panic.as_ref()))))
    }

    fn publish(&self, event: ShippingCostEvent) {
        let request_id = event.request_id();
        let name = event.name();

        match self.sink.emit(event) {
            Ok(()) => {}
            Err(error @ EmitError::NoSubscribers { .. }) => {
                debug!(request_id = %request_id, event = %name, %error, "Event had no subscribers");
            }
            Err(error) => {
                warn!(request_id = %request_id, event = %name, %error, "Failed to emit event");
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        format!("provider panicked: {message}")
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("provider panicked: {message}")
    } else {
        "provider panicked".to_string()
    }
}
