//! REST backend client for the Vitrine storefront.
//!
//! Exposes the three collaborator seams the stores depend on —
//! [`CatalogApi`], [`ReorderApi`], and [`CheckoutApi`] — plus [`HttpApi`],
//! the reqwest implementation that talks to the real backend. Wire
//! records carry decimal prices and are converted to domain types at
//! this boundary.

pub mod client;
pub mod error;
pub mod retry;
pub mod types;

pub use client::{CatalogApi, CheckoutApi, HttpApi, ReorderApi};
pub use error::ApiError;
pub use retry::{Backoff, RetryPolicy};
pub use types::{
    CategoryRecord, CheckoutItem, CheckoutRequest, CheckoutResponse, EntityKind, ProductRecord,
};
