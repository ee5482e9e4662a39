use crate::api::PageFetcher;
use crate::internal::error::FetchFailure;
use crate::internal::models::{Article, PageResponse};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Maximum number of page requests in flight at once.
pub const MAX_CONCURRENT_FETCHES: usize = 5;

/// How pages after the first one are requested.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FetchStrategy {
    /// One page at a time, in increasing order.
    Sequential,
    /// Up to [`MAX_CONCURRENT_FETCHES`] pages in flight on the current task.
    #[default]
    Concurrent,
}

impl FetchStrategy {
    pub fn concurrency_limit(&self) -> usize {
        match self {
            Self::Sequential => 1,
            Self::Concurrent => MAX_CONCURRENT_FETCHES,
        }
    }
}

/// Outcome of one aggregation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchReport {
    /// Records of every fetched page, in ascending page order.
    pub articles: Vec<Article>,
    pub total_pages: u32,
    /// Pages that failed and contributed nothing, ascending.
    pub missing_pages: Vec<u32>,
}

impl FetchReport {
    pub fn is_partial(&self) -> bool {
        !self.missing_pages.is_empty()
    }
}

/// Drives page discovery and merges every page into one ordered collection.
#[derive(Debug, Clone)]
pub struct Aggregator<F> {
    fetcher: F,
    strategy: FetchStrategy,
}

impl<F: PageFetcher> Aggregator<F> {
    pub fn new(fetcher: F, strategy: FetchStrategy) -> Self {
        Self { fetcher, strategy }
    }

    /// Fetch every page of the listing.
    ///
    /// Page 1 is fetched first to learn `total_pages`; its failure is the only
    /// fatal one. Later pages are fetched according to the strategy and merged
    /// in page order no matter which request completes first. A failed later
    /// page is logged and recorded in [`FetchReport::missing_pages`].
    pub async fn fetch_all_articles(&self) -> Result<FetchReport, FetchFailure> {
        let first = self.fetcher.fetch_page(1).await?;
        let total_pages = first.total_pages.max(1);
        tracing::info!(total_pages, strategy = %self.strategy, "Total pages to fetch");

        let mut report = FetchReport {
            articles: first.data,
            total_pages,
            missing_pages: Vec::new(),
        };

        if total_pages == 1 {
            return Ok(report);
        }

        for result in self.fetch_remaining(total_pages).await {
            match result {
                Ok(page) => report.articles.extend(page.data),
                Err(failure) => {
                    tracing::warn!(page = failure.page, error = %failure.cause, "page fetch failed, skipping");
                    report.missing_pages.push(failure.page);
                }
            }
        }

        if report.is_partial() {
            tracing::warn!(
                missing = ?report.missing_pages,
                "aggregation finished with missing pages"
            );
        }
        tracing::debug!(articles = report.articles.len(), "aggregation complete");

        Ok(report)
    }

    /// Fetch pages `2..=total_pages` with at most `concurrency_limit` requests
    /// in flight. A slot frees as soon as any request resolves, so completion
    /// order is arbitrary; each result carries its page number and the batch
    /// is put back into page order before merging.
    async fn fetch_remaining(&self, total_pages: u32) -> Vec<Result<PageResponse, FetchFailure>> {
        let fetcher = &self.fetcher;

        let mut results: Vec<(u32, Result<PageResponse, FetchFailure>)> =
            stream::iter(2..=total_pages)
                .map(|page| async move { (page, fetcher.fetch_page(page).await) })
                .buffer_unordered(self.strategy.concurrency_limit())
                .collect()
                .await;

        results.sort_by_key(|(page, _)| *page);
        results.into_iter().map(|(_, result)| result).collect()
    }
}
