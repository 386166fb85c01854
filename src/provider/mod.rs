//! Payment-provider seam
//!
//! The gateway never computes shipping costs itself. It delegates to a
//! [`ShippingCostProvider`], which wraps whatever SDK or remote service owns the
//! lookup, and relays the outcome as an event.
//!
//! # Example: Implementing ShippingCostProvider
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use shipping_gateway::{LookupError, ShippingCostProvider, ShippingCostRequest, ShippingCostResult};
//!
//! pub struct PaymentSheetProvider {
//!     client: PaymentsClient,
//! }
//!
//! #[async_trait]
//! impl ShippingCostProvider for PaymentSheetProvider {
//!     async fn lookup_shipping_costs(
//!         &self,
//!         request: &ShippingCostRequest,
//!     ) -> Result<ShippingCostResult, LookupError> {
//!         let methods = self
//!             .client
//!             .shipping_methods(request.country_code(), request.state_code())
//!             .await
//!             .map_err(|e| LookupError::network(e.to_string()))?;
//!
//!         if methods.is_empty() {
//!             return Err(LookupError::no_shipping_options(request.to_string()));
//!         }
//!
//!         Ok(ShippingCostResult::new(serde_json::to_value(methods).unwrap_or_default()))
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::LookupError;
use crate::types::{ShippingCostRequest, ShippingCostResult};

/// Capability to look up shipping costs for a region
///
/// The trait is object-safe, allowing runtime pluggability via
/// `Arc<dyn ShippingCostProvider>`. Implementations may be called concurrently
/// from several tasks.
#[async_trait]
pub trait ShippingCostProvider: Send + Sync {
    /// Look up shipping methods and their costs for `request`
    ///
    /// # Returns
    ///
    /// - `Ok(ShippingCostResult)` - provider payload, relayed unchanged
    /// - `Err(LookupError)` - relayed as a `shipping_costs_error` event
    async fn lookup_shipping_costs(
        &self,
        request: &ShippingCostRequest,
    ) -> Result<ShippingCostResult, LookupError>;
}

#[async_trait]
impl<T> ShippingCostProvider for Arc<T>
where
    T: ShippingCostProvider + ?Sized,
{
    async fn lookup_shipping_costs(
        &self,
        request: &ShippingCostRequest,
    ) -> Result<ShippingCostResult, LookupError> {
        (**self).lookup_shipping_costs(request).await
    }
}

#[async_trait]
impl<T> ShippingCostProvider for Box<T>
where
    T: ShippingCostProvider + ?Sized,
{
    async fn lookup_shipping_costs(
        &self,
        request: &ShippingCostRequest,
    ) -> Result<ShippingCostResult, LookupError> {
        (**self).lookup_shipping_costs(request).await
    }
}
