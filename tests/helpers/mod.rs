// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for shipping gateway integration tests
//!
//! Provides a scripted payment provider so the gateway can be exercised without a
//! real payment SDK.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use shipping_gateway::{
    LookupError, ShippingCostEvent, ShippingCostProvider, ShippingCostRequest, ShippingCostResult,
};
use tokio::sync::mpsc;

/// What the mock does for a region
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockResponse {
    /// Succeed with this payload
    Costs(Value),
    /// Fail with this error
    Fail(LookupError),
    /// Panic with this message
    Panic(&'static str),
    /// Never answer
    Hang,
}

#[derive(Debug, Clone)]
struct Script {
    response: MockResponse,
    delay: Option<Duration>,
}

/// Mock ShippingCostProvider for testing gateway relay logic
///
/// Responses are scripted per (country, state) pair. Unscripted regions use the
/// fallback response, which by default fails with an `unconfigured` provider error.
///
/// # Example
///
/// ```rust,ignore
/// let mock = Arc::new(
///     MockShippingProvider::new()
///         .with_costs("US", "CA", json!({ "amount": 500, "currency": "USD" }))
///         .with_error("ZZ", "", LookupError::unsupported_region("unsupported region"))
///         .with_delay("US", "CA", Duration::from_millis(100)),
/// );
///
/// let gateway = ShippingCostGateway::new(Arc::clone(&mock), tx)?;
/// ```
pub struct MockShippingProvider {
    scripts: HashMap<(String, String), Script>,
    fallback: MockResponse,
    calls: Mutex<Vec<ShippingCostRequest>>,
}

#[allow(dead_code)]
impl MockShippingProvider {
    /// Create a mock with no scripted regions
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            fallback: MockResponse::Fail(LookupError::provider(
                "unconfigured",
                "no response configured",
            )),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn script(mut self, country: &str, state: &str, response: MockResponse) -> Self {
        let key = (country.to_string(), state.to_string());
        let delay = self.scripts.get(&key).and_then(|s| s.delay);
        self.scripts.insert(key, Script { response, delay });
        self
    }

    /// Succeed for a region
    pub fn with_costs(self, country: &str, state: &str, payload: Value) -> Self {
        self.script(country, state, MockResponse::Costs(payload))
    }

    /// Fail for a region
    pub fn with_error(self, country: &str, state: &str, error: LookupError) -> Self {
        self.script(country, state, MockResponse::Fail(error))
    }

    /// Panic for a region
    pub fn with_panic(self, country: &str, state: &str, message: &'static str) -> Self {
        self.script(country, state, MockResponse::Panic(message))
    }

    /// Never answer for a region
    pub fn with_hang(self, country: &str, state: &str) -> Self {
        self.script(country, state, MockResponse::Hang)
    }

    /// Delay the scripted response for a region
    ///
    /// Call after scripting the region's response.
    pub fn with_delay(mut self, country: &str, state: &str, delay: Duration) -> Self {
        if let Some(script) = self
            .scripts
            .get_mut(&(country.to_string(), state.to_string()))
        {
            script.delay = Some(delay);
        }
        self
    }

    /// Response for every unscripted region
    pub fn with_fallback(mut self, response: MockResponse) -> Self {
        self.fallback = response;
        self
    }

    /// Requests received so far, in arrival order
    pub fn calls(&self) -> Vec<ShippingCostRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShippingCostProvider for MockShippingProvider {
    async fn lookup_shipping_costs(
        &self,
        request: &ShippingCostRequest,
    ) -> Result<ShippingCostResult, LookupError> {
        self.calls.lock().unwrap().push(request.clone());

        let key = (
            request.country_code().to_string(),
            request.state_code().to_string(),
        );
        let (response, delay) = match self.scripts.get(&key) {
            Some(script) => (script.response.clone(), script.delay),
            None => (self.fallback.clone(), None),
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match response {
            MockResponse::Costs(payload) => Ok(ShippingCostResult::new(payload)),
            MockResponse::Fail(error) => Err(error),
            MockResponse::Panic(message) => panic!("{}", message),
            MockResponse::Hang => std::future::pending().await,
        }
    }
}

/// Receive exactly `count` events, failing the test if they don't arrive in time
#[allow(dead_code)]
pub async fn collect_events(
    rx: &mut mpsc::UnboundedReceiver<ShippingCostEvent>,
    count: usize,
) -> Vec<ShippingCostEvent> {
    let mut events = Vec::with_capacity(count);
    for _ in 0..count {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event channel closed");
        events.push(event);
    }
    events
}

/// Assert that no further event arrives within a short grace period
#[allow(dead_code)]
pub async fn assert_no_more_events(rx: &mut mpsc::UnboundedReceiver<ShippingCostEvent>) {
    let extra = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
    assert!(
        !matches!(extra, Ok(Some(_))),
        "expected no further events, got {extra:?}"
    );
}

/// Install a test subscriber honouring RUST_LOG
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
