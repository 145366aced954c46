//! The checkout flow: hand the cart to the backend, come back with a
//! WhatsApp deep link.
//!
//! Checkout is deliberately fire and forget — there is no payment step
//! to guarantee. The backend normally answers with a number and a
//! pre-built message; on any backend failure the flow falls back to a
//! client-built message and the configured fallback number. Either way
//! the cart is cleared before returning.

use tracing::warn;
use vitrine_api::{CheckoutApi, CheckoutItem, CheckoutRequest};
use vitrine_commerce::checkout::{order_message, whatsapp_link, DEFAULT_WHATSAPP_NUMBER};
use vitrine_commerce::ids::OrderId;
use vitrine_storage::KeyValueStore;

use crate::cart_store::CartStore;
use crate::error::CheckoutError;

/// Result of a checkout handoff.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    /// Backend order id, present only on the confirmed path.
    pub order_id: Option<OrderId>,
    /// The `wa.me` deep link to open.
    pub deep_link: String,
    /// The message behind the deep link, for display or receipts.
    pub message: String,
    /// Whether the backend confirmed the order or the client fell back.
    pub confirmed: bool,
}

/// Orchestrates order submission against a [`CheckoutApi`].
pub struct CheckoutFlow<A> {
    api: A,
    fallback_number: String,
}

impl<A: CheckoutApi> CheckoutFlow<A> {
    /// Create a flow with the default fallback WhatsApp number.
    pub fn new(api: A) -> Self {
        Self {
            api,
            fallback_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
        }
    }

    /// Use a configured fallback number instead of the default.
    pub fn with_fallback_number(mut self, number: impl Into<String>) -> Self {
        self.fallback_number = number.into();
        self
    }

    /// Validate, submit, and clear the cart.
    ///
    /// Validation failures (empty cart, blank name) reject before any
    /// I/O and leave the cart untouched. Past validation the cart is
    /// always cleared, whether the backend confirmed or not.
    pub async fn submit<S: KeyValueStore>(
        &self,
        cart_store: &mut CartStore<S>,
        customer_name: &str,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            return Err(CheckoutError::MissingCustomerName);
        }
        if cart_store.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        // Built from the local cart before it is cleared; used verbatim
        // on the fallback path and as the message of last resort on the
        // confirmed one.
        let fallback_message =
            order_message(cart_store.lines(), cart_store.total(), customer_name);

        let request = CheckoutRequest {
            customer_name: customer_name.to_string(),
            items: cart_store
                .lines()
                .iter()
                .map(|line| CheckoutItem {
                    product_id: line.id.to_string(),
                    quantity: line.quantity,
                })
                .collect(),
        };

        let outcome = match self.api.submit_order(&request).await {
            Ok(response) if response.whatsapp_number.is_some() => {
                let number = response.whatsapp_number.unwrap_or_default();
                let message = response
                    .whatsapp_message
                    .unwrap_or(fallback_message);
                CheckoutOutcome {
                    order_id: response.order_id.map(OrderId::new),
                    deep_link: whatsapp_link(&number, &message),
                    message,
                    confirmed: true,
                }
            }
            Ok(_) => {
                warn!("checkout response carried no WhatsApp number; using fallback link");
                self.fallback_outcome(fallback_message)
            }
            Err(e) => {
                warn!(error = %e, "checkout submission failed; using fallback link");
                self.fallback_outcome(fallback_message)
            }
        };

        cart_store.clear();
        Ok(outcome)
    }

    fn fallback_outcome(&self, message: String) -> CheckoutOutcome {
        CheckoutOutcome {
            order_id: None,
            deep_link: whatsapp_link(&self.fallback_number, &message),
            message,
            confirmed: false,
        }
    }
}
