//! Typed identifiers for catalog and order entities.
//!
//! The backend owns identity; the client only ever carries ids it was
//! handed, so these are thin string wrappers whose whole job is to keep
//! a product id from being passed where a category id belongs. They
//! serialize as plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id! {
    /// Identifies a product across the catalog, cart, and checkout.
    ProductId
}

define_id! {
    /// Identifies a category; also scopes a product's reorder group.
    CategoryId
}

define_id! {
    /// Identifies a confirmed backend order.
    OrderId
}
