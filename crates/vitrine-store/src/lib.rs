//! Injected application stores for the Vitrine storefront.
//!
//! Each store is an explicitly constructed object handed to the UI tree
//! root, never an ambient global: build one [`CartStore`] and one
//! [`CatalogStore`] at application start and share them for the life of
//! the process. Mutations are synchronous `&mut self` calls, so the
//! single logical thread of control serializes them; the only suspension
//! points are the network calls behind the catalog and checkout stores.
//!
//! - [`CartStore`] — single source of truth for cart contents, persisted
//!   write-through to a [`vitrine_storage::KeyValueStore`]
//! - [`CatalogStore`] — confirmed/working catalog snapshots with
//!   optimistic drag-and-drop reordering
//! - [`stepper`] — the pure +/- quantity policy
//! - [`CheckoutFlow`] — order handoff with the WhatsApp fallback path

pub mod cart_store;
pub mod catalog_store;
pub mod checkout;
pub mod error;
pub mod stepper;
pub mod subscribe;

pub use cart_store::CartStore;
pub use catalog_store::CatalogStore;
pub use checkout::{CheckoutFlow, CheckoutOutcome};
pub use error::{CatalogError, CheckoutError};
pub use stepper::{step, CartCommand, StepAction};
pub use subscribe::{SubscriberId, Subscribers};
