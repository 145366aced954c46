//! Catalog entities and display ordering.
//!
//! The backend owns the catalog; the client holds a read copy and only
//! ever mutates `sort_order` through the reorder engine. Display order
//! within a sibling group is ascending `sort_order`, ties broken by the
//! prior relative order (stable sort).

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Category description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Whether the category is shown on the storefront.
    pub active: bool,
    /// Display position among all categories.
    pub sort_order: i32,
}

/// A purchasable product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Product description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current catalog price.
    pub price: Money,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// The category this product belongs to; scopes its reorder group.
    pub category_id: CategoryId,
    /// Whether the product can be ordered.
    pub available: bool,
    /// Whether the product is featured on the storefront.
    #[serde(default)]
    pub featured: bool,
    /// Display position within the owning category.
    pub sort_order: i32,
}

/// The shared shape of anything that participates in drag-and-drop
/// reordering within a sibling group.
pub trait Orderable {
    /// Identifier sent to the backend in bulk-reorder payloads.
    fn entity_id(&self) -> &str;

    /// Current display position.
    fn sort_order(&self) -> i32;

    /// Assign a new display position.
    fn set_sort_order(&mut self, sort_order: i32);
}

impl Orderable for Category {
    fn entity_id(&self) -> &str {
        self.id.as_str()
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn set_sort_order(&mut self, sort_order: i32) {
        self.sort_order = sort_order;
    }
}

impl Orderable for Product {
    fn entity_id(&self) -> &str {
        self.id.as_str()
    }

    fn sort_order(&self) -> i32 {
        self.sort_order
    }

    fn set_sort_order(&mut self, sort_order: i32) {
        self.sort_order = sort_order;
    }
}

/// One category together with its products, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub products: Vec<Product>,
}

// Reordering the category list moves whole groups, so a group orders by
// its category.
impl Orderable for CategoryGroup {
    fn entity_id(&self) -> &str {
        self.category.entity_id()
    }

    fn sort_order(&self) -> i32 {
        self.category.sort_order
    }

    fn set_sort_order(&mut self, sort_order: i32) {
        self.category.sort_order = sort_order;
    }
}

/// Sort a sibling group by ascending `sort_order`, preserving the prior
/// relative order of ties.
pub fn sort_by_order<T: Orderable>(items: &mut [T]) {
    items.sort_by_key(|i| i.sort_order());
}

/// Group products under their categories and sort both levels.
///
/// Returns the groups in display order plus any products whose
/// `category_id` matches no fetched category. Orphans are dropped from
/// the grouped view; the caller decides whether to log them.
pub fn group_catalog(
    categories: Vec<Category>,
    products: Vec<Product>,
) -> (Vec<CategoryGroup>, Vec<Product>) {
    let mut groups: Vec<CategoryGroup> = categories
        .into_iter()
        .map(|category| CategoryGroup {
            category,
            products: Vec::new(),
        })
        .collect();

    let mut orphans = Vec::new();
    for product in products {
        match groups
            .iter_mut()
            .find(|g| g.category.id == product.category_id)
        {
            Some(group) => group.products.push(product),
            None => orphans.push(product),
        }
    }

    sort_by_order(&mut groups);
    for group in &mut groups {
        sort_by_order(&mut group.products);
    }

    (groups, orphans)
}
