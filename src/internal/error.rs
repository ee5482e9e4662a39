use thiserror::Error;

/// Why a single page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("page numbers start at 1")]
    InvalidPage,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
}

/// A page fetch that did not produce a usable payload.
///
/// Returned as a value so the caller decides whether the missing page is
/// fatal (page 1) or tolerable (any later page).
#[derive(Debug, Error)]
#[error("failed to fetch page {page}: {cause}")]
pub struct FetchFailure {
    pub page: u32,
    #[source]
    pub cause: FetchCause,
}

impl FetchFailure {
    pub fn new(page: u32, cause: impl Into<FetchCause>) -> Self {
        Self {
            page,
            cause: cause.into(),
        }
    }
}
