// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Broadcast event bus with subscriptions keyed by event name.
//!
//! # Examples
//!
//! ## Subscribe to successful lookups only
//!
//! ```rust,ignore
//! use shipping_gateway::{EventBus, EventName, ShippingCostGateway};
//!
//! let bus = EventBus::default();
//! let mut retrieved = bus.subscribe(EventName::ShippingCostsRetrieved);
//! let gateway = ShippingCostGateway::new(provider, bus.clone())?;
//!
//! gateway.fetch_shipping_costs("US", "CA");
//! if let Some(event) = retrieved.recv().await {
//!     println!("costs: {}", event.to_json());
//! }
//! ```
//!
//! ## Consume every event as a stream
//!
//! ```rust,ignore
//! use futures::StreamExt;
//!
//! let mut events = bus.subscribe_all().into_stream();
//! while let Some(event) = events.next().await {
//!     println!("{}: {}", event.name(), event.request_id());
//! }
//! ```

use futures::stream::{self, Stream};
use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::warn;

use super::EventSink;
use crate::config::constants::DEFAULT_EVENT_BUS_CAPACITY;
use crate::errors::EmitError;
use crate::event::{EventName, ShippingCostEvent};

/// Multi-subscriber event channel
///
/// Cloning the bus yields another handle to the same channel. Each subscription
/// buffers up to `capacity` events; a subscriber that falls further behind skips
/// the oldest events and logs how many were lost.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ShippingCostEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUS_CAPACITY)
    }
}

impl EventBus {
    /// Create a bus buffering up to `capacity` events per subscriber (at least 1)
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribe to events published under `name`
    ///
    /// Only events emitted after this call are observed.
    pub fn subscribe(&self, name: EventName) -> EventSubscription {
        EventSubscription {
            receiver: self.sender.subscribe(),
            filter: Some(name),
        }
    }

    /// Subscribe to every event
    pub fn subscribe_all(&self) -> EventSubscription {
        EventSubscription {
            receiver: self.sender.subscribe(),
            filter: None,
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventSink for EventBus {
    fn emit(&self, event: ShippingCostEvent) -> Result<(), EmitError> {
        let name = event.name();
        self.sender
            .send(event)
            .map(|_| ())
            .map_err(|_| EmitError::NoSubscribers {
                event: name.as_str(),
            })
    }
}

/// Receiving half of an [`EventBus`] subscription
#[derive(Debug)]
pub struct EventSubscription {
    receiver: broadcast::Receiver<ShippingCostEvent>,
    filter: Option<EventName>,
}

impl EventSubscription {
    fn accepts(&self, event: &ShippingCostEvent) -> bool {
        self.filter.is_none_or(|name| event.name() == name)
    }

    /// Wait for the next matching event
    ///
    /// Returns `None` once every bus handle has been dropped and the buffer is drained.
    pub async fn recv(&mut self) -> Option<ShippingCostEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.accepts(&event) => return Some(event),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, filter = ?self.filter, "Event subscriber lagged, events dropped");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next buffered matching event without waiting
    pub fn try_recv(&mut self) -> Option<ShippingCostEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.accepts(&event) => return Some(event),
                Ok(_) => continue,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!(skipped, filter = ?self.filter, "Event subscriber lagged, events dropped");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// Turn the subscription into a stream of matching events
    pub fn into_stream(self) -> impl Stream<Item = ShippingCostEvent> + Send + 'static {
        stream::unfold(self, |mut subscription| async move {
            subscription
                .recv()
                .await
                .map(|event| (event, subscription))
        })
    }
}
