//! Cart and line item types.
//!
//! The cart is an ordered list of line items, at most one per product id.
//! Name and price are snapshotted when a line is created; later catalog
//! edits never retroactively change an existing line. Totals are derived
//! from the line list on every read rather than maintained incrementally,
//! which rules out drift between the lines and their aggregate.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Invariant: `quantity >= 1`. A line driven to quantity zero is deleted,
/// never kept around.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The purchasable item this line refers to.
    pub id: ProductId,
    /// Product name at the time the line was created.
    pub name: String,
    /// Unit price at the time the line was created.
    pub unit_price: Money,
    /// Product image, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Quantity, always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// The line's contribution to the cart total.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply(self.quantity as i64)
    }
}

/// What the catalog hands to the cart when an item is added.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCandidate {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub image_url: Option<String>,
}

/// A shopping cart.
///
/// Insertion order is preserved for display; it is irrelevant to totals.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from previously persisted lines.
    ///
    /// Collapses any duplicate ids in the snapshot into one line each so
    /// the uniqueness invariant holds regardless of what was stored.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.lines.iter_mut().find(|l| l.id == line.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity)
                }
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Add an item to the cart.
    ///
    /// If a line with the candidate's id already exists its quantity is
    /// incremented by one and the candidate's name/price are ignored;
    /// otherwise a new line with quantity 1 is inserted at the end.
    pub fn add_item(&mut self, candidate: LineCandidate) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == candidate.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine {
            id: candidate.id,
            name: candidate.name,
            unit_price: candidate.unit_price,
            image_url: candidate.image_url,
            quantity: 1,
        });
    }

    /// Remove the line with the given id.
    ///
    /// Returns `true` if a line was removed; removing an absent id is a
    /// silent no-op, not an error.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        self.lines.len() < len_before
    }

    /// Set the absolute quantity of the line with the given id.
    ///
    /// A quantity of zero behaves exactly like [`Cart::remove_item`].
    /// Returns `true` if the cart changed.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(id);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.id == id) {
            if line.quantity == quantity {
                return false;
            }
            line.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Empty the cart. Returns `true` if there was anything to empty.
    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        true
    }

    /// The lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by product id.
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// Quantity of the line with the given id, if present.
    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.get(id).map(|l| l.quantity)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total item count (sum of quantities), recomputed on every call.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity as u64).sum()
    }

    /// Cart total (sum of line subtotals), recomputed on every call.
    ///
    /// All lines come from one catalog and share its currency; an empty
    /// cart totals zero in the default currency.
    pub fn total(&self) -> Money {
        let currency = self
            .lines
            .first()
            .map(|l| l.unit_price.currency)
            .unwrap_or_default();
        let subtotals: Vec<Money> = self.lines.iter().map(|l| l.subtotal()).collect();
        Money::sum(subtotals.iter(), currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn candidate(id: &str, cents: i64) -> LineCandidate {
        LineCandidate {
            id: ProductId::new(id),
            name: format!("Item {}", id),
            unit_price: Money::new(cents, Currency::BRL),
            image_url: None,
        }
    }

    #[test]
    fn test_add_item_inserts_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add_item(candidate("cake", 5000));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(&ProductId::new("cake")), Some(1));
    }

    #[test]
    fn test_add_item_twice_increments_single_line() {
        let mut cart = Cart::new();
        cart.add_item(candidate("x", 1000));
        cart.add_item(candidate("x", 1000));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(&ProductId::new("x")), Some(2));
        assert_eq!(cart.total().amount_cents, 2000);
    }

    #[test]
    fn test_add_item_does_not_resync_snapshot() {
        let mut cart = Cart::new();
        cart.add_item(candidate("x", 1000));

        // Catalog price changed between taps; the line keeps its snapshot.
        let mut repriced = candidate("x", 9999);
        repriced.name = "Renamed".to_string();
        cart.add_item(repriced);

        let line = cart.get(&ProductId::new("x")).unwrap();
        assert_eq!(line.unit_price.amount_cents, 1000);
        assert_eq!(line.name, "Item x");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(candidate("x", 1000));

        assert!(cart.update_quantity(&ProductId::new("x"), 0));
        assert!(cart.get(&ProductId::new("x")).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = Cart::new();
        cart.add_item(candidate("x", 1000));

        assert!(cart.update_quantity(&ProductId::new("x"), 7));
        assert_eq!(cart.quantity_of(&ProductId::new("x")), Some(7));
        assert_eq!(cart.item_count(), 7);
    }

    #[test]
    fn test_update_quantity_unchanged_reports_no_change() {
        let mut cart = Cart::new();
        cart.add_item(candidate("x", 1000));

        assert!(!cart.update_quantity(&ProductId::new("x"), 1));
        assert!(!cart.update_quantity(&ProductId::new("missing"), 3));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(candidate("x", 1000));
        let before = cart.clone();

        assert!(!cart.remove_item(&ProductId::new("missing")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_item_count_matches_sum_of_quantities() {
        let mut cart = Cart::new();
        cart.add_item(candidate("a", 100));
        cart.add_item(candidate("b", 200));
        cart.add_item(candidate("a", 100));
        cart.update_quantity(&ProductId::new("b"), 4);

        let sum: u64 = cart.lines().iter().map(|l| l.quantity as u64).sum();
        assert_eq!(cart.item_count(), sum);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_uniqueness_across_mixed_operations() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add_item(candidate("a", 100));
        }
        cart.update_quantity(&ProductId::new("a"), 2);
        cart.add_item(candidate("a", 100));
        cart.remove_item(&ProductId::new("a"));
        cart.add_item(candidate("a", 100));

        let count = cart
            .lines()
            .iter()
            .filter(|l| l.id == ProductId::new("a"))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_cake_scenario_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(candidate("cake", 5000));
        cart.add_item(candidate("cake", 5000));
        assert_eq!(cart.total().amount_cents, 10000);

        cart.update_quantity(&ProductId::new("cake"), 1);
        cart.remove_item(&ProductId::new("cake"));

        assert!(cart.is_empty());
        assert_eq!(cart.total().amount_cents, 0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(candidate("a", 100));
        cart.add_item(candidate("b", 200));

        assert!(cart.clear());
        assert!(cart.is_empty());
        // Clearing an already-empty cart changes nothing.
        assert!(!cart.clear());
    }

    #[test]
    fn test_from_lines_collapses_duplicates_and_drops_zero() {
        let lines = vec![
            CartLine {
                id: ProductId::new("a"),
                name: "A".into(),
                unit_price: Money::new(100, Currency::BRL),
                image_url: None,
                quantity: 2,
            },
            CartLine {
                id: ProductId::new("a"),
                name: "A".into(),
                unit_price: Money::new(100, Currency::BRL),
                image_url: None,
                quantity: 1,
            },
            CartLine {
                id: ProductId::new("b"),
                name: "B".into(),
                unit_price: Money::new(200, Currency::BRL),
                image_url: None,
                quantity: 0,
            },
        ];

        let cart = Cart::from_lines(lines);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(&ProductId::new("a")), Some(3));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut cart = Cart::new();
        cart.add_item(candidate("a", 350));
        cart.add_item(candidate("b", 1200));
        cart.update_quantity(&ProductId::new("b"), 3);

        let json = serde_json::to_string(cart.lines()).unwrap();
        let lines: Vec<CartLine> = serde_json::from_str(&json).unwrap();
        let restored = Cart::from_lines(lines);

        assert_eq!(restored, cart);
    }
}
