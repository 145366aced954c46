//! The catalog store: confirmed and working snapshots with optimistic
//! drag-and-drop reordering.
//!
//! The backend owns catalog ordering. This store keeps two copies of the
//! grouped catalog: the *confirmed* snapshot from the last successful
//! fetch and the *working* snapshot the UI renders. A refresh replaces
//! both wholesale; a drag gesture mutates only the working copy, is
//! shown immediately, and is then persisted with one bulk request per
//! gesture. A failed persist keeps the optimistic order — the gesture
//! must never snap back while a request is in flight — and the next
//! confirmed refresh is the correction point. There is no fine-grained
//! merge, ever.

use tracing::{debug, warn};
use vitrine_api::{CatalogApi, EntityKind, ReorderApi};
use vitrine_commerce::catalog::{group_catalog, CategoryGroup};
use vitrine_commerce::ids::CategoryId;
use vitrine_commerce::money::Currency;
use vitrine_commerce::reorder::{move_item, renumber, MoveOutcome};

use crate::error::CatalogError;
use crate::subscribe::{SubscriberId, Subscribers};

/// Observable catalog snapshots with optimistic reordering.
pub struct CatalogStore<A> {
    api: A,
    currency: Currency,
    confirmed: Vec<CategoryGroup>,
    working: Vec<CategoryGroup>,
    subscribers: Subscribers<Vec<CategoryGroup>>,
}

impl<A> CatalogStore<A> {
    /// Create a store over the given backend collaborator.
    pub fn new(api: A) -> Self {
        Self {
            api,
            currency: Currency::default(),
            confirmed: Vec::new(),
            working: Vec::new(),
            subscribers: Subscribers::new(),
        }
    }

    /// Price products in `currency` instead of the default.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// The working snapshot: what the UI should render right now.
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.working
    }

    /// The last snapshot confirmed by the backend.
    pub fn confirmed_groups(&self) -> &[CategoryGroup] {
        &self.confirmed
    }

    /// Register a callback invoked with the working snapshot after every
    /// visible change.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&Vec<CategoryGroup>) + 'static,
    ) -> SubscriberId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn notify(&mut self) {
        self.subscribers.notify(&self.working);
    }
}

impl<A: CatalogApi + ReorderApi> CatalogStore<A> {
    /// Fetch the full catalog and replace both snapshots wholesale.
    ///
    /// Failure is returned to the caller (the one catalog error a user
    /// actually sees, behind a retry affordance); the previous snapshots
    /// stay in place.
    pub async fn refresh(&mut self) -> Result<(), CatalogError> {
        let (categories, products) = tokio::try_join!(
            self.api.fetch_categories(),
            self.api.fetch_products()
        )?;

        let currency = self.currency;
        let categories = categories.into_iter().map(|c| c.into_domain()).collect();
        let products = products
            .into_iter()
            .map(|p| p.into_domain(currency))
            .collect();

        let (groups, orphans) = group_catalog(categories, products);
        if !orphans.is_empty() {
            debug!(
                count = orphans.len(),
                "dropping products that reference unknown categories"
            );
        }

        self.confirmed = groups.clone();
        self.working = groups;
        self.notify();
        Ok(())
    }

    /// Move a category from one position to another in the top-level
    /// group and persist the new order.
    pub async fn move_category(&mut self, from: usize, to: usize) -> Result<(), CatalogError> {
        match move_item(&mut self.working, from, to)? {
            MoveOutcome::Unchanged => return Ok(()),
            MoveOutcome::Moved => {}
        }

        let updates = renumber(&mut self.working);
        self.notify();

        if let Err(e) = self.api.reorder(EntityKind::Categories, &updates).await {
            warn!(error = %e, "category reorder not persisted; keeping optimistic order");
        }
        Ok(())
    }

    /// Move a product within its own category's sibling group and persist
    /// the new order. Cross-category moves are not a supported gesture.
    pub async fn move_product(
        &mut self,
        category_id: &CategoryId,
        from: usize,
        to: usize,
    ) -> Result<(), CatalogError> {
        let group = self
            .working
            .iter_mut()
            .find(|g| &g.category.id == category_id)
            .ok_or_else(|| CatalogError::UnknownCategory(category_id.to_string()))?;

        match move_item(&mut group.products, from, to)? {
            MoveOutcome::Unchanged => return Ok(()),
            MoveOutcome::Moved => {}
        }

        let updates = renumber(&mut group.products);
        self.notify();

        if let Err(e) = self.api.reorder(EntityKind::Products, &updates).await {
            warn!(
                category = %category_id,
                error = %e,
                "product reorder not persisted; keeping optimistic order"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use vitrine_api::{ApiError, CategoryRecord, ProductRecord};
    use vitrine_commerce::reorder::{ReorderError, SortOrderUpdate};

    #[derive(Clone, Default)]
    struct MockApi {
        categories: Vec<CategoryRecord>,
        products: Vec<ProductRecord>,
        fail_fetch: Arc<Mutex<bool>>,
        fail_reorder: bool,
        reorder_calls: Arc<Mutex<Vec<(EntityKind, Vec<SortOrderUpdate>)>>>,
    }

    impl MockApi {
        fn reorder_calls(&self) -> Vec<(EntityKind, Vec<SortOrderUpdate>)> {
            self.reorder_calls.lock().unwrap().clone()
        }

        fn set_fail_fetch(&self, fail: bool) {
            *self.fail_fetch.lock().unwrap() = fail;
        }
    }

    #[async_trait]
    impl CatalogApi for MockApi {
        async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>, ApiError> {
            if *self.fail_fetch.lock().unwrap() {
                return Err(ApiError::Connection("backend down".into()));
            }
            Ok(self.categories.clone())
        }

        async fn fetch_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
            if *self.fail_fetch.lock().unwrap() {
                return Err(ApiError::Connection("backend down".into()));
            }
            Ok(self.products.clone())
        }
    }

    #[async_trait]
    impl ReorderApi for MockApi {
        async fn reorder(
            &self,
            kind: EntityKind,
            updates: &[SortOrderUpdate],
        ) -> Result<(), ApiError> {
            self.reorder_calls
                .lock()
                .unwrap()
                .push((kind, updates.to_vec()));
            if self.fail_reorder {
                return Err(ApiError::Http {
                    status: 500,
                    url: "http://test/api/reorder".into(),
                });
            }
            Ok(())
        }
    }

    fn category_record(id: &str, sort_order: i32) -> CategoryRecord {
        CategoryRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: None,
            image_url: None,
            is_active: true,
            sort_order,
        }
    }

    fn product_record(id: &str, category: &str, sort_order: i32) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: None,
            price: 10.0,
            image_url: None,
            is_available: true,
            is_featured: false,
            category_id: category.to_string(),
            sort_order,
        }
    }

    fn bakery_api() -> MockApi {
        MockApi {
            categories: vec![
                category_record("cakes", 1),
                category_record("sweets", 2),
                category_record("drinks", 3),
            ],
            products: vec![
                product_record("p1", "cakes", 1),
                product_record("p2", "cakes", 2),
                product_record("p3", "cakes", 3),
                product_record("s1", "sweets", 1),
            ],
            ..MockApi::default()
        }
    }

    fn category_ids(store: &CatalogStore<MockApi>) -> Vec<String> {
        store
            .groups()
            .iter()
            .map(|g| g.category.id.to_string())
            .collect()
    }

    // === Refresh ===

    #[tokio::test]
    async fn test_refresh_groups_and_sorts() {
        let mut store = CatalogStore::new(bakery_api());
        store.refresh().await.unwrap();

        assert_eq!(category_ids(&store), vec!["cakes", "sweets", "drinks"]);
        assert_eq!(store.groups()[0].products.len(), 3);
        assert_eq!(store.groups()[2].products.len(), 0);
        assert_eq!(store.confirmed_groups(), store.groups());
        // Decimal wire price converted at the boundary.
        assert_eq!(store.groups()[0].products[0].price.amount_cents, 1000);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_snapshot() {
        let api = bakery_api();
        let mut store = CatalogStore::new(api.clone());
        store.refresh().await.unwrap();

        api.set_fail_fetch(true);
        let err = store.refresh().await.unwrap_err();
        assert!(matches!(err, CatalogError::Fetch(_)));
        assert!(err.is_retryable());

        // The failed refresh left the last good snapshots in place.
        assert_eq!(store.groups().len(), 3);
        assert_eq!(store.confirmed_groups().len(), 3);
    }

    // === Category moves ===

    #[tokio::test]
    async fn test_move_category_applies_optimistic_order_and_persists() {
        let mut store = CatalogStore::new(bakery_api());
        store.refresh().await.unwrap();

        store.move_category(0, 2).await.unwrap();
        assert_eq!(category_ids(&store), vec!["sweets", "drinks", "cakes"]);

        let calls = store.api.reorder_calls();
        assert_eq!(calls.len(), 1);
        let (kind, updates) = &calls[0];
        assert_eq!(*kind, EntityKind::Categories);
        assert_eq!(
            updates
                .iter()
                .map(|u| (u.id.as_str(), u.sort_order))
                .collect::<Vec<_>>(),
            vec![("sweets", 1), ("drinks", 2), ("cakes", 3)]
        );
    }

    #[tokio::test]
    async fn test_same_index_move_issues_no_persistence_call() {
        let mut store = CatalogStore::new(bakery_api());
        store.refresh().await.unwrap();
        let before = category_ids(&store);

        store.move_category(1, 1).await.unwrap();

        assert_eq!(category_ids(&store), before);
        assert!(store.api.reorder_calls().is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_move_is_rejected_without_side_effects() {
        let mut store = CatalogStore::new(bakery_api());
        store.refresh().await.unwrap();
        let before = category_ids(&store);

        let err = store.move_category(0, 9).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Reorder(ReorderError::IndexOutOfRange { index: 9, len: 3 })
        ));
        assert_eq!(category_ids(&store), before);
        assert!(store.api.reorder_calls().is_empty());
    }

    #[tokio::test]
    async fn test_persist_failure_keeps_optimistic_order() {
        let mut api = bakery_api();
        api.fail_reorder = true;
        let mut store = CatalogStore::new(api);
        store.refresh().await.unwrap();

        // No rollback: the gesture succeeds from the caller's view.
        store.move_category(2, 0).await.unwrap();
        assert_eq!(category_ids(&store), vec!["drinks", "cakes", "sweets"]);
        assert_eq!(store.api.reorder_calls().len(), 1);
        // The confirmed snapshot still has the backend's order.
        assert_eq!(store.confirmed_groups()[0].category.id.as_str(), "cakes");
    }

    #[tokio::test]
    async fn test_refresh_is_the_correction_point_after_failed_persist() {
        let mut api = bakery_api();
        api.fail_reorder = true;
        let mut store = CatalogStore::new(api);
        store.refresh().await.unwrap();

        store.move_category(0, 2).await.unwrap();
        assert_ne!(category_ids(&store), vec!["cakes", "sweets", "drinks"]);

        // Backend never saw the move; the next fetch replaces the working
        // copy wholesale.
        store.refresh().await.unwrap();
        assert_eq!(category_ids(&store), vec!["cakes", "sweets", "drinks"]);
    }

    // === Product moves ===

    #[tokio::test]
    async fn test_move_product_is_scoped_to_its_category() {
        let mut store = CatalogStore::new(bakery_api());
        store.refresh().await.unwrap();

        store
            .move_product(&CategoryId::new("cakes"), 2, 0)
            .await
            .unwrap();

        let cakes: Vec<&str> = store.groups()[0]
            .products
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(cakes, vec!["p3", "p1", "p2"]);

        // Sibling group untouched.
        assert_eq!(store.groups()[1].products[0].id.as_str(), "s1");

        // The payload covers exactly the moved group, renumbered 1..N.
        let calls = store.api.reorder_calls();
        assert_eq!(calls.len(), 1);
        let (kind, updates) = &calls[0];
        assert_eq!(*kind, EntityKind::Products);
        assert_eq!(
            updates
                .iter()
                .map(|u| (u.id.as_str(), u.sort_order))
                .collect::<Vec<_>>(),
            vec![("p3", 1), ("p1", 2), ("p2", 3)]
        );
    }

    #[tokio::test]
    async fn test_move_product_unknown_category_is_an_error() {
        let mut store = CatalogStore::new(bakery_api());
        store.refresh().await.unwrap();

        let err = store
            .move_product(&CategoryId::new("nope"), 0, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(_)));
        assert!(!err.is_retryable());
        assert!(store.api.reorder_calls().is_empty());
    }

    // === Subscription ===

    #[tokio::test]
    async fn test_subscribers_see_refresh_and_optimistic_moves() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut store = CatalogStore::new(bakery_api());
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            store.subscribe(move |groups: &Vec<CategoryGroup>| {
                seen.borrow_mut()
                    .push(groups[0].category.id.to_string());
            });
        }

        store.refresh().await.unwrap();
        store.move_category(2, 0).await.unwrap();
        store.move_category(0, 0).await.unwrap(); // unchanged, no notify

        assert_eq!(*seen.borrow(), vec!["cakes", "drinks"]);
    }
}
