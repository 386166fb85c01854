//! Error types for the shipping gateway.
//!
//! - [`LookupError`] - failures reported by (or on behalf of) the payment provider.
//!   These are relayed as `shipping_costs_error` events, never returned to callers.
//! - [`EmitError`] - an event sink could not deliver an event.
//! - [`GatewayError`] - the gateway could not be constructed.

mod emit;
mod gateway;
mod lookup;

pub use emit::EmitError;
pub use gateway::GatewayError;
pub use lookup::LookupError;
