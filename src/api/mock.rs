//! Scripted article service for testing

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::{ApiError, Article, SearchApi, Stats};
use crate::query::SearchRequest;

/// Mock article service that returns predetermined responses
///
/// Useful for exercising the session state machine without a network.
/// Responses are queued in call order; an empty queue yields an empty
/// success so simple tests need no setup. Every search request and vote is
/// recorded for assertions.
#[derive(Debug, Default)]
pub struct MockApi {
    search_responses: RefCell<VecDeque<Result<Vec<Article>, ApiError>>>,
    suggestions: RefCell<VecDeque<Result<String, ApiError>>>,
    search_requests: RefCell<Vec<SearchRequest>>,
    votes: RefCell<Vec<(i64, bool)>>,
    fail_votes: Cell<bool>,
    article_count: Cell<i64>,
}

impl MockApi {
    /// Create a mock with no scripted responses
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next unscripted search call
    pub fn queue_search(&self, response: Result<Vec<Article>, ApiError>) {
        self.search_responses.borrow_mut().push_back(response);
    }

    /// Queue the outcome of the next suggestion call
    pub fn queue_suggestion(&self, response: Result<String, ApiError>) {
        self.suggestions.borrow_mut().push_back(response);
    }

    /// Make all vote calls fail from now on
    pub fn fail_votes(&self) {
        self.fail_votes.set(true);
    }

    /// Set the article count reported by `stats`
    pub fn set_article_count(&self, count: i64) {
        self.article_count.set(count);
    }

    /// The search requests received so far, in call order
    #[must_use]
    pub fn search_requests(&self) -> Vec<SearchRequest> {
        self.search_requests.borrow().clone()
    }

    /// The votes received so far, as `(article_id, trusted)` pairs
    #[must_use]
    pub fn votes(&self) -> Vec<(i64, bool)> {
        self.votes.borrow().clone()
    }
}

impl SearchApi for MockApi {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>, ApiError> {
        self.search_requests.borrow_mut().push(request.clone());
        self.search_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn suggest_query(&self) -> Result<String, ApiError> {
        self.suggestions
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }

    async fn set_trusted(&self, article_id: i64, trusted: bool) -> Result<(), ApiError> {
        if self.fail_votes.get() {
            return Err(ApiError::Status(500));
        }
        self.votes.borrow_mut().push((article_id, trusted));
        Ok(())
    }

    async fn stats(&self) -> Result<Stats, ApiError> {
        Ok(Stats {
            count: self.article_count.get(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterState;
    use crate::query::build_request;

    fn block_on<F: Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    #[test]
    fn test_unscripted_search_returns_empty_success() {
        let api = MockApi::new();
        let request = build_request(&FilterState::new(vec![]), "q");

        let result = block_on(api.search(&request)).unwrap();
        assert!(result.is_empty());
        assert_eq!(api.search_requests().len(), 1);
    }

    #[test]
    fn test_scripted_responses_are_consumed_in_order() {
        let api = MockApi::new();
        api.queue_search(Err(ApiError::Status(502)));
        api.queue_search(Ok(vec![Article::default()]));
        let request = build_request(&FilterState::new(vec![]), "");

        assert!(block_on(api.search(&request)).is_err());
        assert_eq!(block_on(api.search(&request)).unwrap().len(), 1);
    }

    #[test]
    fn test_votes_are_recorded() {
        let api = MockApi::new();

        block_on(api.set_trusted(9, true)).unwrap();
        block_on(api.set_trusted(4, false)).unwrap();

        assert_eq!(api.votes(), vec![(9, true), (4, false)]);
    }
}
