//! Wire DTOs and their conversions into domain types.
//!
//! The backend speaks decimal prices and snake_case JSON; everything is
//! converted to cents-based domain types here, at the boundary.

use serde::{Deserialize, Serialize};
use vitrine_commerce::catalog::{Category, Product};
use vitrine_commerce::ids::{CategoryId, ProductId};
use vitrine_commerce::money::{Currency, Money};

/// Which sibling-group kind a bulk reorder targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Categories,
    Products,
}

impl EntityKind {
    /// Path segment of the reorder endpoint.
    pub fn path_segment(&self) -> &'static str {
        match self {
            EntityKind::Categories => "categories",
            EntityKind::Products => "products",
        }
    }
}

/// A category as returned by `GET /api/categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl CategoryRecord {
    /// Convert into the domain entity.
    pub fn into_domain(self) -> Category {
        Category {
            id: CategoryId::new(self.id),
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            active: self.is_active,
            sort_order: self.sort_order,
        }
    }
}

/// A product as returned by `GET /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal price; converted to cents at this boundary.
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub category_id: String,
    #[serde(default)]
    pub sort_order: i32,
}

impl ProductRecord {
    /// Convert into the domain entity, pricing in `currency`.
    pub fn into_domain(self, currency: Currency) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price: Money::from_decimal(self.price, currency),
            image_url: self.image_url,
            category_id: CategoryId::new(self.category_id),
            available: self.is_available,
            featured: self.is_featured,
            sort_order: self.sort_order,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Envelope of `GET /api/categories`.
#[derive(Debug, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

/// Envelope of `GET /api/products`.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

/// Body of `PUT /api/reorder/{categories|products}`.
#[derive(Debug, Serialize)]
pub struct ReorderRequest<'a> {
    pub items: &'a [vitrine_commerce::reorder::SortOrderUpdate],
}

/// Response of the reorder endpoint.
#[derive(Debug, Deserialize)]
pub struct ReorderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// One item of a checkout request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutItem {
    pub product_id: String,
    pub quantity: u32,
}

/// Body of `POST /api/checkout`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    pub customer_name: String,
    pub items: Vec<CheckoutItem>,
}

/// Response of `POST /api/checkout`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub whatsapp_message: Option<String>,
    #[serde(default)]
    pub total: Option<f64>,
}
