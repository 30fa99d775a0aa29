// Series fetching boundary
use crate::domain::range::DateRange;
use async_trait::async_trait;
use thiserror::Error;

/// Why one data source's fetch leg failed. The display form is the
/// human-readable reason shown inline on the affected chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Non-2xx response, carrying the server's status text.
    #[error("{0}")]
    Status(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response body: {0}")]
    Decode(String),
}

pub type FetchOutcome = Result<serde_json::Value, FetchError>;

/// One GET per logical data source for a given range. Calls are independent:
/// no retry, no cache, and any number may be in flight concurrently.
#[async_trait]
pub trait SeriesFetcher: Send + Sync {
    async fn fetch(&self, url: &str, range: &DateRange) -> FetchOutcome;
}
