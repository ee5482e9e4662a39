use crate::internal::error::{FetchCause, FetchFailure};
use crate::internal::models::PageResponse;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

pub const ARTICLES_API_URL: &str = "https://jsonmock.hackerrank.com/api/articles";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves one page of the articles listing.
///
/// Implementations perform exactly one round trip per call and never retry;
/// failures come back as a [`FetchFailure`] tagged with the page number.
pub trait PageFetcher {
    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<PageResponse, FetchFailure>>;
}

/// HTTP API service for the paginated articles endpoint.
///
/// The inner `reqwest::Client` is a connection pool and is shared read-only
/// by every concurrent page fetch.
#[derive(Clone, Debug)]
pub struct ApiService {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiService {
    /// Create a new `ApiService` pointed at the public articles API.
    pub fn new() -> Self {
        Self::with_base_url(ARTICLES_API_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a URL with the given query and deserialize the JSON body into `T`.
    ///
    /// Non-2xx statuses are reported before the body is read, so an error page
    /// never surfaces as a parse failure.
    async fn get_json<T>(&self, url: &str, query: &[(&str, String)]) -> Result<T, FetchCause>
    where
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .get(url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchCause::Status(status));
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl PageFetcher for ApiService {
    async fn fetch_page(&self, page: u32) -> Result<PageResponse, FetchFailure> {
        if page == 0 {
            return Err(FetchFailure::new(page, FetchCause::InvalidPage));
        }

        tracing::debug!(page, url = %self.base_url, "fetching page");
        self.get_json(&self.base_url, &[("page", page.to_string())])
            .await
            .map_err(|cause| FetchFailure::new(page, cause))
    }
}

impl Default for ApiService {
    fn default() -> Self {
        Self::new()
    }
}
