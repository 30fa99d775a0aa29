// HTTP series fetcher backed by reqwest
use crate::application::fetcher::{FetchError, FetchOutcome, SeriesFetcher};
use crate::domain::range::DateRange;
use async_trait::async_trait;
use reqwest::StatusCode;

/// One shared client; every fetch is an independent GET with the range
/// appended as `start_date`/`end_date` query parameters.
#[derive(Debug, Clone, Default)]
pub struct HttpSeriesFetcher {
    client: reqwest::Client,
}

impl HttpSeriesFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SeriesFetcher for HttpSeriesFetcher {
    async fn fetch(&self, url: &str, range: &DateRange) -> FetchOutcome {
        let response = self
            .client
            .get(url)
            .query(&range.query_params())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} returned {}", url, status);
            return Err(FetchError::Status(status_reason(status)));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// The inline chart error shows the status text, so prefer the canonical
/// reason phrase over a bare code.
fn status_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reason_prefers_canonical_text() {
        assert_eq!(status_reason(StatusCode::NOT_FOUND), "Not Found");
        assert_eq!(status_reason(StatusCode::BAD_GATEWAY), "Bad Gateway");
    }

    #[test]
    fn test_status_reason_falls_back_to_the_code() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_reason(status), "599 <unknown status code>");
    }
}
