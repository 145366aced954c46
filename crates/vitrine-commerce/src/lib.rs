//! Storefront domain types and logic for Vitrine.
//!
//! This crate is the pure core of the storefront: no I/O, no async.
//!
//! - **Cart**: line items with snapshotted prices and derived totals
//! - **Catalog**: categories and products, grouping and display ordering
//! - **Reorder**: the single-element move used by drag-and-drop curation
//! - **Checkout**: order message and WhatsApp deep-link building
//!
//! # Example
//!
//! ```rust
//! use vitrine_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_item(LineCandidate {
//!     id: ProductId::new("brigadeiro"),
//!     name: "Brigadeiro".to_string(),
//!     unit_price: Money::new(350, Currency::BRL),
//!     image_url: None,
//! });
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total().display(), "R$3.50");
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod ids;
pub mod money;
pub mod reorder;

pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{Cart, CartLine, LineCandidate};
    pub use crate::catalog::{group_catalog, Category, CategoryGroup, Orderable, Product};
    pub use crate::checkout::{order_message, whatsapp_link, DEFAULT_WHATSAPP_NUMBER};
    pub use crate::reorder::{move_item, renumber, MoveOutcome, ReorderError, SortOrderUpdate};
}
