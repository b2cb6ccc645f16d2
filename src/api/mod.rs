//! Client layer for the remote article service
//!
//! The service is consumed through the [`SearchApi`] trait so the engine
//! never touches HTTP directly. [`HttpApi`] is the real implementation;
//! [`MockApi`] is a scripted stand-in for tests, allowing the whole search
//! flow to run without a network.
//!
//! All failures are non-fatal: they surface as [`ApiError`] values that the
//! session turns into an error state while leaving the previous view intact.

mod client;
mod mock;
mod types;

pub use client::HttpApi;
pub use mock::MockApi;
pub use types::{Article, Stats};

use thiserror::Error;

use crate::query::SearchRequest;

/// Errors from the remote article service
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, invalid response body)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),

    /// The search endpoint returned something other than an article array
    #[error("expected an array of articles, got {0}")]
    UnexpectedPayload(&'static str),

    /// The response body did not match the expected shape
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured API base URL is not usable
    #[error("invalid API base URL '{0}'")]
    InvalidBase(String),
}

/// Operations offered by the article service
///
/// Implementations are expected to be cheap to call repeatedly; the session
/// holds a reference for its whole lifetime. Everything runs on the one
/// event-loop task, so the futures carry no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait SearchApi {
    /// Run a search and return the matching articles in relevance order
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>, ApiError>;

    /// Ask the service to generate an example search query
    async fn suggest_query(&self) -> Result<String, ApiError>;

    /// Mark an article as trusted (`true`) or untrusted (`false`)
    async fn set_trusted(&self, article_id: i64, trusted: bool) -> Result<(), ApiError>;

    /// Fetch the total number of indexed articles
    async fn stats(&self) -> Result<Stats, ApiError>;
}

/// JSON type name for diagnostics on unexpected payloads
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
