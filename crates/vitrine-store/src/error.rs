//! Store-level error types.

use thiserror::Error;
use vitrine_api::ApiError;
use vitrine_commerce::reorder::ReorderError;

/// Errors surfaced by the catalog store.
///
/// Reorder *persistence* failures never appear here; they are logged and
/// the optimistic local order stands. What does surface is fetch failure
/// (so the UI can offer a retry) and gesture validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Fetching the catalog from the backend failed.
    #[error("catalog fetch failed: {0}")]
    Fetch(#[from] ApiError),

    /// The drag gesture addressed an invalid position.
    #[error(transparent)]
    Reorder(#[from] ReorderError),

    /// A product move targeted a category that is not in the snapshot.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl CatalogError {
    /// Whether the UI should offer a retry affordance.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Fetch(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Validation errors from the checkout flow, raised before any I/O.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// The customer name is missing or blank.
    #[error("customer name is required")]
    MissingCustomerName,
}
