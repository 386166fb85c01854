// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the shipping gateway
//!
//! Arbitrary region codes must never make `fetch_shipping_costs` fail, and every
//! call must produce exactly one event that correlates back to it.

mod helpers;

use std::collections::HashSet;
use std::time::Duration;

use helpers::{MockResponse, MockShippingProvider};
use proptest::prelude::*;
use serde_json::json;
use shipping_gateway::{
    DispatchMode, EventName, GatewayConfigBuilder, LookupError, ShippingCostEvent,
    ShippingCostGateway,
};
use tokio::sync::mpsc;

fn arb_response() -> impl Strategy<Value = MockResponse> {
    prop_oneof![
        Just(MockResponse::Costs(json!({ "amount": 500, "currency": "USD" }))),
        Just(MockResponse::Fail(LookupError::unsupported_region("unsupported region"))),
        Just(MockResponse::Fail(LookupError::network("connection reset"))),
        Just(MockResponse::Fail(LookupError::Cancelled)),
    ]
}

fn arb_dispatch_mode() -> impl Strategy<Value = DispatchMode> {
    prop_oneof![Just(DispatchMode::Concurrent), Just(DispatchMode::Serialized)]
}

/// Run `calls` lookups on a fresh runtime and return the events they produced
fn run_lookups(
    response: MockResponse,
    mode: DispatchMode,
    calls: &[(String, String)],
) -> (Vec<u64>, Vec<ShippingCostEvent>) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();

    runtime.block_on(async {
        let mock = MockShippingProvider::new().with_fallback(response);
        let (tx, mut rx) = mpsc::unbounded_channel();
        let config = GatewayConfigBuilder::new().dispatch_mode(mode).build();
        let gateway = ShippingCostGateway::with_config(mock, tx, config).unwrap();

        let ids: Vec<u64> = calls
            .iter()
            .map(|(country, state)| {
                gateway
                    .fetch_shipping_costs(country.as_str(), state.as_str())
                    .get()
            })
            .collect();
        drop(gateway);

        let mut events = Vec::new();
        while let Ok(Some(event)) = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await {
            events.push(event);
        }
        (ids, events)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: any input yields exactly one event, tagged with the caller's id and request
    #[test]
    fn prop_every_call_yields_exactly_one_event(
        country in ".{0,8}",
        state in ".{0,8}",
        response in arb_response(),
        mode in arb_dispatch_mode(),
    ) {
        let (ids, events) = run_lookups(response.clone(), mode, &[(country.clone(), state.clone())]);

        prop_assert_eq!(events.len(), 1);
        let event = &events[0];
        prop_assert_eq!(event.request_id().get(), ids[0]);
        prop_assert_eq!(event.request().country_code(), country.as_str());
        prop_assert_eq!(event.request().state_code(), state.as_str());

        let expected_name = match response {
            MockResponse::Costs(_) => EventName::ShippingCostsRetrieved,
            _ => EventName::ShippingCostsError,
        };
        prop_assert_eq!(event.name(), expected_name);
    }

    /// Property: a batch of calls yields one event per call and every id is accounted for
    #[test]
    fn prop_batch_ids_are_unique_and_all_answered(
        calls in prop::collection::vec(("[A-Z]{0,2}", "[A-Z]{0,3}"), 1..12),
        response in arb_response(),
        mode in arb_dispatch_mode(),
    ) {
        let (ids, events) = run_lookups(response, mode, &calls);

        prop_assert_eq!(events.len(), calls.len());

        let unique: HashSet<u64> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len(), "ids must be unique");

        let mut received: Vec<u64> = events.iter().map(|e| e.request_id().get()).collect();
        if mode == DispatchMode::Serialized {
            prop_assert_eq!(&received, &ids, "serialized mode preserves call order");
        }
        received.sort_unstable();
        prop_assert_eq!(received, ids);
    }
}
