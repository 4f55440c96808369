//! Per-page orchestration and the sequential batch driver.
//!
//! The central resilience property lives here: every page runs inside its
//! own failure boundary. A fetch error or any extraction failure is logged
//! and turns into "no record for this page"; nothing propagates far enough
//! to abort the batch.

use tracing::{debug, info, warn};

use crate::extract;
use crate::script;
use crate::traits::fetcher::PageFetcher;
use crate::types::{PageRecord, ScrapeConfig};

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// One record per page that extracted successfully, in input order.
    pub records: Vec<PageRecord>,

    /// Number of links processed (success or not).
    pub pages_processed: usize,

    /// Links that yielded no record.
    pub failed_urls: Vec<String>,
}

impl BatchOutcome {
    /// True when every page produced a record.
    pub fn is_success(&self) -> bool {
        self.failed_urls.is_empty()
    }
}

/// Sequential scraper over a link list.
pub struct Scraper<F> {
    fetcher: F,
    config: ScrapeConfig,
}

impl<F: PageFetcher> Scraper<F> {
    /// Create a scraper with the default configuration.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            config: ScrapeConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    /// Fetch one page and attempt the extraction chain on each qualifying
    /// script block, in document order, until one succeeds.
    ///
    /// Every failure mode ends up as `None` after a log line; this method
    /// never errors.
    pub async fn scrape_page(&self, url: &str) -> Option<PageRecord> {
        let markup = match self.fetcher.fetch(url).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!(url = %url, error = %e, "page fetch failed");
                return None;
            }
        };

        let blocks = script::data_blocks(&markup, &self.config.epitope_var, &self.config.compiled_var);
        debug!(url = %url, candidates = blocks.len(), "qualifying script blocks");

        for block in &blocks {
            match extract::extract_record(block, url, &self.config) {
                Ok(record) => return Some(record),
                Err(e) => {
                    warn!(url = %url, error = %e, "extraction failed for script block");
                }
            }
        }

        info!(url = %url, "no data extracted from the link");
        None
    }

    /// Process every link sequentially, one page fully folded into the
    /// outcome before the next fetch starts.
    ///
    /// `progress` is called after each page with (pages done, total).
    pub async fn run<P>(&self, links: &[String], mut progress: P) -> BatchOutcome
    where
        P: FnMut(usize, usize),
    {
        let total = links.len();
        info!(links = total, "starting scrape run");

        let mut outcome = BatchOutcome::default();

        for (index, link) in links.iter().enumerate() {
            match self.scrape_page(link).await {
                Some(record) => outcome.records.push(record),
                None => outcome.failed_urls.push(link.clone()),
            }
            outcome.pages_processed += 1;

            info!("Processed link {}/{}", index + 1, total);
            progress(index + 1, total);
        }

        info!(
            extracted = outcome.records.len(),
            failed = outcome.failed_urls.len(),
            "scrape run complete"
        );
        outcome
    }
}
