//! The persistent cart store.
//!
//! Single source of truth for "what is in the cart". Construct one at
//! application start with the storage collaborator and a key, share it
//! with every surface that shows cart state. Every mutation is applied
//! synchronously, written through to storage best-effort, and then
//! broadcast to subscribers; mutations that change nothing do neither.

use tracing::warn;
use vitrine_commerce::cart::{Cart, CartLine, LineCandidate};
use vitrine_commerce::ids::ProductId;
use vitrine_commerce::money::Money;
use vitrine_storage::{KeyValueStore, StoreJsonExt};

use crate::stepper::{step, CartCommand, StepAction};
use crate::subscribe::{SubscriberId, Subscribers};

/// Default storage key for the persisted cart snapshot.
pub const DEFAULT_CART_KEY: &str = "vitrine-cart";

/// Observable cart state persisted write-through to a key-value store.
pub struct CartStore<S: KeyValueStore> {
    storage: S,
    storage_key: String,
    cart: Cart,
    subscribers: Subscribers<Cart>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store over `storage`, loading any persisted snapshot.
    ///
    /// An absent, unreadable, or unparsable snapshot starts the cart
    /// empty; the failure is logged, never fatal.
    pub fn new(storage: S, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let cart = match storage.get_json::<Vec<CartLine>>(&storage_key) {
            Ok(Some(lines)) => Cart::from_lines(lines),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %storage_key, error = %e, "could not load persisted cart; starting empty");
                Cart::new()
            }
        };
        Self {
            storage,
            storage_key,
            cart,
            subscribers: Subscribers::new(),
        }
    }

    /// Create a store with the default storage key.
    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_CART_KEY)
    }

    // === Mutations ===

    /// Add an item: insert with quantity 1, or increment the existing line.
    pub fn add_item(&mut self, candidate: LineCandidate) {
        self.cart.add_item(candidate);
        self.persist_and_notify();
    }

    /// Remove a line. Removing an absent id changes nothing and notifies
    /// no one.
    pub fn remove_item(&mut self, id: &ProductId) {
        if self.cart.remove_item(id) {
            self.persist_and_notify();
        }
    }

    /// Set a line's absolute quantity; zero removes the line.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if self.cart.update_quantity(id, quantity) {
            self.persist_and_notify();
        }
    }

    /// Empty the cart (used after the checkout handoff).
    pub fn clear(&mut self) {
        if self.cart.clear() {
            self.persist_and_notify();
        }
    }

    /// Apply a +/- stepper press for `candidate`'s item.
    pub fn step(&mut self, candidate: LineCandidate, action: StepAction) {
        match step(self.cart.quantity_of(&candidate.id), action) {
            CartCommand::Add => self.add_item(candidate),
            CartCommand::SetQuantity(quantity) => self.update_quantity(&candidate.id, quantity),
            CartCommand::Remove => self.remove_item(&candidate.id),
            CartCommand::None => {}
        }
    }

    // === Reads ===

    /// The current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Derived total, recomputed from the lines on every call.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Derived item count, recomputed from the lines on every call.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    // === Subscription ===

    /// Register a callback invoked after every effective mutation.
    pub fn subscribe(&mut self, callback: impl FnMut(&Cart) + 'static) -> SubscriberId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Write-through persist, then notify. Persistence is best-effort:
    /// a storage failure is logged and the in-memory state stands.
    fn persist_and_notify(&mut self) {
        if let Err(e) = self.storage.set_json(&self.storage_key, &self.cart.lines()) {
            warn!(key = %self.storage_key, error = %e, "failed to persist cart");
        }
        self.subscribers.notify(&self.cart);
    }
}
