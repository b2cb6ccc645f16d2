//! Search request construction
//!
//! Turns a [`FilterState`] plus the free-text query into the ordered query
//! parameters the article service expects. Construction is pure; URL
//! assembly and escaping happen in the `api` layer via the `url` crate.
//!
//! # Serialization contract
//!
//! - `query` is always present, even when empty.
//! - `cat` appears only when categories are selected; comma-joined in
//!   selection order.
//! - `tp` appears only for a non-default content type, as a wire token.
//! - `start_dt` / `end_dt` appear only when the side is set; the client
//!   never cross-validates the two.
//! - `cls` appears only when the selected labels are a genuine partial
//!   restriction: non-empty and of a different cardinality than the label
//!   universe. A full (or full-sized) selection matches everything, so
//!   sending it would be redundant.
//! - `pub_ids` appears only when publication ids are selected.

use url::Url;

use crate::filters::FilterState;

/// An ordered set of query parameters for the search endpoint
///
/// Parameter order is deterministic so that identical filter state always
/// produces an identical request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    params: Vec<(&'static str, String)>,
}

impl SearchRequest {
    /// The parameters in serialization order
    #[must_use]
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Look up a parameter value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Append the parameters to `url`, percent-escaping values
    pub fn apply_to(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &self.params {
            pairs.append_pair(key, value);
        }
    }
}

/// Build the search request for the current filter state and query text
#[must_use]
pub fn build_request(filters: &FilterState, query_text: &str) -> SearchRequest {
    let mut params = vec![("query", query_text.to_string())];

    if !filters.categories().is_empty() {
        params.push(("cat", filters.categories().join(",")));
    }

    if let Some(token) = filters.content_type().wire_token() {
        params.push(("tp", token.to_string()));
    }

    let dates = filters.dates();
    if let Some(start) = dates.start {
        params.push(("start_dt", start.format("%Y-%m-%d").to_string()));
    }
    if let Some(end) = dates.end {
        params.push(("end_dt", end.format("%Y-%m-%d").to_string()));
    }

    // A selection the size of the whole universe is no restriction at all,
    // and an empty one is handled the same way by the server.
    let labels = filters.labels();
    if !labels.is_empty() && labels.len() != filters.universe().len() {
        params.push(("cls", labels.join(",")));
    }

    if !filters.publishers().is_empty() {
        let ids: Vec<String> = filters
            .publishers()
            .iter()
            .map(ToString::to_string)
            .collect();
        params.push(("pub_ids", ids.join(",")));
    }

    SearchRequest { params }
}
