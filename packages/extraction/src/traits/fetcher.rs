//! Fetcher trait for pluggable page retrieval.
//!
//! The scraping pipeline never talks to the network directly; it goes
//! through this seam so tests can substitute canned markup (see
//! [`crate::testing::MockFetcher`]) and applications can swap transports.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Retrieves raw page markup for a URL.
///
/// Implementations decide transport, timeouts and headers. The contract is
/// minimal: either the full markup text comes back, or a
/// [`FetchError`](crate::error::FetchError) describing why it did not.
/// Errors are handled per page by the pipeline and never abort a batch.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the markup for `url`.
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for std::sync::Arc<T> {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        (**self).fetch(url).await
    }
}
