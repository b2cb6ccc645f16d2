//! HTTP implementation of the article service client

use tokio::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::types::SuggestedQuery;
use super::{ApiError, Article, SearchApi, Stats, json_type_name};
use crate::TARGET_API_REQUEST;
use crate::query::SearchRequest;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `reqwest`-backed client for the article service
///
/// Holds the configured base URL (e.g. `http://host:8000/api/articles`) and
/// a pooled HTTP client with a fixed request timeout.
pub struct HttpApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpApi {
    /// Create a client for the given API base URL
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBase` if the URL cannot be parsed or cannot
    /// carry path segments, and `ApiError::Transport` if the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBase(base_url.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBase(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client, base })
    }

    /// The configured base URL
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, name: &str) -> Url {
        let mut url = self.base.clone();
        // Cannot fail: the constructor rejects cannot-be-a-base URLs.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(name);
        }
        url
    }
}

impl SearchApi for HttpApi {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>, ApiError> {
        let mut url = self.endpoint("search");
        request.apply_to(&mut url);

        debug!(target: TARGET_API_REQUEST, "Searching articles: {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(target: TARGET_API_REQUEST, "Search failed with status {status}");
            return Err(ApiError::Status(status.as_u16()));
        }

        // The endpoint contract is a bare JSON array; anything else (an
        // error object, a string) is treated as a malformed response.
        let payload: serde_json::Value = response.json().await?;
        if !payload.is_array() {
            warn!(
                target: TARGET_API_REQUEST,
                "Search returned {} instead of an article array",
                json_type_name(&payload)
            );
            return Err(ApiError::UnexpectedPayload(json_type_name(&payload)));
        }

        Ok(serde_json::from_value(payload)?)
    }

    async fn suggest_query(&self) -> Result<String, ApiError> {
        let url = self.endpoint("generate_random_input");

        debug!(target: TARGET_API_REQUEST, "Requesting example query");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(target: TARGET_API_REQUEST, "Suggestion failed with status {status}");
            return Err(ApiError::Status(status.as_u16()));
        }

        let suggested: SuggestedQuery = response.json().await?;
        Ok(suggested.query)
    }

    async fn set_trusted(&self, article_id: i64, trusted: bool) -> Result<(), ApiError> {
        let name = if trusted { "trusted" } else { "not_trusted" };
        let mut url = self.endpoint(name);
        url.query_pairs_mut()
            .append_pair("article_id", &article_id.to_string());

        debug!(target: TARGET_API_REQUEST, "Marking article {article_id} as {name}");
        let response = self.client.post(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(target: TARGET_API_REQUEST, "Vote failed with status {status}");
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(())
    }

    async fn stats(&self) -> Result<Stats, ApiError> {
        let url = self.endpoint("stats");

        debug!(target: TARGET_API_REQUEST, "Fetching index stats");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
