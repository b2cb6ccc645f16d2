//! Wire types consumed from the article service

use serde::{Deserialize, Serialize};

/// An article as returned by the search endpoint
///
/// Consumed read-only; the service serializes field names in camelCase.
/// Unknown fields are ignored and missing ones fall back to defaults, so
/// minor server-side schema drift does not break the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    /// Service-assigned identifier, used for vote actions
    pub id: i64,
    pub title: String,
    pub url: String,
    /// Coarse article kind ("News Article", "Press Release")
    #[serde(rename = "type")]
    pub kind: String,
    /// Classification label assigned by the service
    pub classification: String,
    pub credibility: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub publisher: String,
    pub publication_id: i64,
    pub source_id: i64,
    /// ISO timestamp of original publication, if known
    pub published_at: Option<String>,
    /// ISO timestamp of when the service indexed the article
    pub scanned_at: Option<String>,
    /// Quality score on a 0-5 scale
    pub trust_factor: f64,
}

/// Response of the suggestion endpoint
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SuggestedQuery {
    pub query: String,
}

/// Index statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Stats {
    /// Total number of indexed articles
    pub count: i64,
}
