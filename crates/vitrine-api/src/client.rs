//! Collaborator seams and the reqwest-backed implementation.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use vitrine_commerce::reorder::SortOrderUpdate;

use crate::error::ApiError;
use crate::retry::RetryPolicy;
use crate::types::{
    CategoriesResponse, CategoryRecord, CheckoutRequest, CheckoutResponse, EntityKind,
    ProductRecord, ProductsResponse, ReorderRequest, ReorderResponse,
};

/// Read access to the catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>, ApiError>;
    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, ApiError>;
}

/// Bulk sort-order persistence for one sibling group.
///
/// The client assumes no partial-success contract: a failure anywhere in
/// the batch counts as failure of the whole batch.
#[async_trait]
pub trait ReorderApi: Send + Sync {
    async fn reorder(&self, kind: EntityKind, updates: &[SortOrderUpdate])
        -> Result<(), ApiError>;
}

/// Order submission.
#[async_trait]
pub trait CheckoutApi: Send + Sync {
    async fn submit_order(&self, request: &CheckoutRequest) -> Result<CheckoutResponse, ApiError>;
}

/// Default request timeout for [`HttpApi`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// reqwest-backed implementation of all three API seams.
///
/// Idempotent calls (the catalog GETs and the absolute-valued reorder
/// PUT) go through the retry policy; the checkout POST is sent exactly
/// once and failures surface to the caller.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl HttpApi {
    /// Create a client for `base_url` with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
        })
    }

    /// Set the retry policy for idempotent calls.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response)
    }

    /// Run an idempotent call under the retry policy.
    async fn with_retries<T, F, Fut>(&self, operation: &str, mut call: F) -> Result<T, ApiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut attempt = 0;
        loop {
            match call().await {
                Ok(value) => return Ok(value),
                Err(e) if self.retry.should_retry(&e, attempt) => {
                    let delay = self.retry.backoff.delay_for_attempt(attempt);
                    tracing::debug!(
                        operation,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "retrying after transient API failure"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_categories_once(&self) -> Result<Vec<CategoryRecord>, ApiError> {
        let url = self.url("api/categories");
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        let envelope: CategoriesResponse = response.json().await?;
        if !envelope.success {
            return Err(ApiError::Rejected("category listing failed".into()));
        }
        Ok(envelope.categories)
    }

    async fn get_products_once(&self) -> Result<Vec<ProductRecord>, ApiError> {
        let url = self.url("api/products");
        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        let envelope: ProductsResponse = response.json().await?;
        if !envelope.success {
            return Err(ApiError::Rejected("product listing failed".into()));
        }
        Ok(envelope.products)
    }

    async fn put_reorder_once(
        &self,
        kind: EntityKind,
        updates: &[SortOrderUpdate],
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("api/reorder/{}", kind.path_segment()));
        let response = self
            .client
            .put(&url)
            .json(&ReorderRequest { items: updates })
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let envelope: ReorderResponse = response.json().await?;
        if !envelope.success {
            return Err(ApiError::Rejected(
                envelope.message.unwrap_or_else(|| "reorder failed".into()),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for HttpApi {
    async fn fetch_categories(&self) -> Result<Vec<CategoryRecord>, ApiError> {
        self.with_retries("fetch_categories", || self.get_categories_once())
            .await
    }

    async fn fetch_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        self.with_retries("fetch_products", || self.get_products_once())
            .await
    }
}

#[async_trait]
impl ReorderApi for HttpApi {
    async fn reorder(
        &self,
        kind: EntityKind,
        updates: &[SortOrderUpdate],
    ) -> Result<(), ApiError> {
        self.with_retries("reorder", || self.put_reorder_once(kind, updates))
            .await
    }
}

#[async_trait]
impl CheckoutApi for HttpApi {
    async fn submit_order(&self, request: &CheckoutRequest) -> Result<CheckoutResponse, ApiError> {
        // Not idempotent: one order submission per call, never retried.
        let url = self.url("api/checkout");
        let response = self.client.post(&url).json(request).send().await?;
        let response = Self::check_status(response).await?;
        let envelope: CheckoutResponse = response.json().await?;
        if !envelope.success {
            return Err(ApiError::Rejected("checkout rejected".into()));
        }
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let api = HttpApi::new("http://localhost:3000/").unwrap();
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.url("api/categories"), "http://localhost:3000/api/categories");
        assert_eq!(api.url("/api/checkout"), "http://localhost:3000/api/checkout");
    }

    #[tokio::test]
    async fn test_with_retries_stops_on_fatal_error() {
        let api = HttpApi::new("http://localhost:3000")
            .unwrap()
            .with_retry(RetryPolicy::new(3));

        let mut calls = 0u32;
        let result: Result<(), ApiError> = api
            .with_retries("op", || {
                calls += 1;
                async { Err(ApiError::Rejected("no".into())) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_with_retries_retries_transient_errors_up_to_budget() {
        let api = HttpApi::new("http://localhost:3000")
            .unwrap()
            .with_retry(RetryPolicy::new(2).with_backoff(crate::retry::Backoff::None));

        let mut calls = 0u32;
        let result: Result<(), ApiError> = api
            .with_retries("op", || {
                calls += 1;
                async { Err(ApiError::Timeout("t".into())) }
            })
            .await;

        assert!(result.is_err());
        // Initial try plus two retries.
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn test_with_retries_returns_first_success() {
        let api = HttpApi::new("http://localhost:3000")
            .unwrap()
            .with_retry(RetryPolicy::new(2).with_backoff(crate::retry::Backoff::None));

        let mut calls = 0u32;
        let result = api
            .with_retries("op", || {
                calls += 1;
                let attempt = calls;
                async move {
                    if attempt < 2 {
                        Err(ApiError::Connection("down".into()))
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 2);
    }
}
