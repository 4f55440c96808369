//! Testing utilities: a canned-response page fetcher.
//!
//! Lets pipeline tests run without network access and inject per-URL
//! failures to exercise the page-level failure boundary.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::PageFetcher;

/// A mock fetcher serving canned markup.
///
/// URLs registered with [`with_failure`](MockFetcher::with_failure) or
/// never registered at all return a status error. Fetched URLs are
/// recorded in order for assertions.
#[derive(Default)]
pub struct MockFetcher {
    pages: HashMap<String, String>,
    failures: HashSet<String>,
    fetched: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `markup` for `url`.
    pub fn with_page(mut self, url: impl Into<String>, markup: impl Into<String>) -> Self {
        self.pages.insert(url.into(), markup.into());
        self
    }

    /// Make `url` fail with an HTTP 500.
    pub fn with_failure(mut self, url: impl Into<String>) -> Self {
        self.failures.insert(url.into());
        self
    }

    /// URLs fetched so far, in call order.
    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetched.read().expect("fetch log lock").clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        self.fetched
            .write()
            .expect("fetch log lock")
            .push(url.to_string());

        if self.failures.contains(url) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            });
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }
}
