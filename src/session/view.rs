//! View abstraction for the search session

use crate::api::ApiError;
use crate::filters::FilterSummary;
use crate::results::PageView;

/// Rendering callbacks invoked by the session
///
/// Adapters (the CLI printer, the interactive loop, test recorders)
/// implement whichever callbacks they care about; the defaults do nothing.
/// The session guarantees the ordering documented on each method: filter
/// callbacks fire after every mutation, search callbacks bracket each
/// round trip.
pub trait SessionView {
    /// Filter state changed; refresh selection counters
    fn filters_changed(&mut self, _summary: &FilterSummary) {}

    /// A search went out; lock the input and show a loading indicator
    fn search_started(&mut self) {}

    /// A page of results is ready, including the total count
    fn page_rendered(&mut self, _page: &PageView<'_>) {}

    /// The search failed; the previous result view is still valid
    fn search_failed(&mut self, _error: &ApiError) {}

    /// An example-query request went out; show a busy indicator
    fn suggest_started(&mut self) {}

    /// The service produced an example query, now in the query text
    fn query_suggested(&mut self, _query: &str) {}

    /// The example-query request failed
    fn suggest_failed(&mut self, _error: &ApiError) {}

    /// A vote was acknowledged by the service
    fn vote_recorded(&mut self, _article_id: i64, _trusted: bool) {}
}

/// A view event captured by [`RecordingView`]
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    FiltersChanged {
        selected_labels: usize,
        selected_categories: usize,
    },
    SearchStarted,
    PageRendered {
        page: usize,
        total: usize,
        titles: Vec<String>,
        has_prev: bool,
        has_next: bool,
    },
    SearchFailed {
        message: String,
    },
    SuggestStarted,
    QuerySuggested(String),
    SuggestFailed {
        message: String,
    },
    VoteRecorded {
        article_id: i64,
        trusted: bool,
    },
}

/// View that records every callback for assertions
///
/// Useful for testing session behavior without a terminal.
#[derive(Debug, Default)]
pub struct RecordingView {
    /// Captured events in callback order
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent rendered page event, if any
    #[must_use]
    pub fn last_page(&self) -> Option<&ViewEvent> {
        self.events
            .iter()
            .rev()
            .find(|event| matches!(event, ViewEvent::PageRendered { .. }))
    }
}

impl SessionView for RecordingView {
    fn filters_changed(&mut self, summary: &FilterSummary) {
        self.events.push(ViewEvent::FiltersChanged {
            selected_labels: summary.selected_labels,
            selected_categories: summary.selected_categories,
        });
    }

    fn search_started(&mut self) {
        self.events.push(ViewEvent::SearchStarted);
    }

    fn page_rendered(&mut self, page: &PageView<'_>) {
        self.events.push(ViewEvent::PageRendered {
            page: page.page,
            total: page.total,
            titles: page
                .articles
                .iter()
                .map(|article| article.title.clone())
                .collect(),
            has_prev: page.has_prev,
            has_next: page.has_next,
        });
    }

    fn search_failed(&mut self, error: &ApiError) {
        self.events.push(ViewEvent::SearchFailed {
            message: error.to_string(),
        });
    }

    fn suggest_started(&mut self) {
        self.events.push(ViewEvent::SuggestStarted);
    }

    fn query_suggested(&mut self, query: &str) {
        self.events.push(ViewEvent::QuerySuggested(query.to_string()));
    }

    fn suggest_failed(&mut self, error: &ApiError) {
        self.events.push(ViewEvent::SuggestFailed {
            message: error.to_string(),
        });
    }

    fn vote_recorded(&mut self, article_id: i64, trusted: bool) {
        self.events.push(ViewEvent::VoteRecorded {
            article_id,
            trusted,
        });
    }
}
