//! Search session state machine
//!
//! This module implements the controller behind every adapter (one-shot
//! CLI, interactive loop, tests): it owns the filter state and the result
//! store, runs the request lifecycle, and renders through the
//! [`SessionView`] trait.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──begin_search──▶ Loading { seq }
//!                           │
//!           array response  │  error / non-array
//!                ┌──────────┴──────────┐
//!                ▼                     ▼
//!           Displaying              Failed
//! ```
//!
//! The query input is locked while a search or an example-query request is
//! in flight; that lock is the only concurrency guard. Every search carries
//! a sequence token, and responses whose token is no longer current are
//! discarded, so a slow response can never overwrite a newer result set.

mod view;

pub use view::{RecordingView, SessionView, ViewEvent};

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::TARGET_API_REQUEST;
use crate::api::{ApiError, Article, SearchApi};
use crate::filters::{ContentType, FilterState};
use crate::query::{SearchRequest, build_request};
use crate::results::ResultStore;

/// Request lifecycle phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// No search issued yet
    Idle,
    /// A search with this sequence token is in flight
    Loading { seq: u64 },
    /// The last search completed and its results are on display
    Displaying,
    /// The last search failed; the previous results remain on display
    Failed { message: String },
}

/// Controller for the search/filter/paginate flow
///
/// Mutated only from the adapter's event loop; all suspension happens at
/// the API boundary inside the `run_*` methods.
pub struct SearchSession {
    filters: FilterState,
    query_text: String,
    store: ResultStore,
    phase: Phase,
    input_locked: bool,
    seq: u64,
}

impl SearchSession {
    /// Create a session over the given label universe and page size
    #[must_use]
    pub fn new(label_universe: Vec<String>, page_size: usize) -> Self {
        Self {
            filters: FilterState::new(label_universe),
            query_text: String::new(),
            store: ResultStore::new(page_size),
            phase: Phase::Idle,
            input_locked: false,
            seq: 0,
        }
    }

    /// The current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Whether the query input is locked by an in-flight request
    #[must_use]
    pub const fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    /// The current filter selections
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The current result store
    #[must_use]
    pub const fn store(&self) -> &ResultStore {
        &self.store
    }

    /// The current free-text query
    #[must_use]
    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    // --- filter commands -------------------------------------------------

    /// Replace the free-text query; refused while the input is locked
    pub fn set_query(&mut self, text: &str) -> bool {
        if self.input_locked {
            return false;
        }
        self.query_text = text.to_string();
        true
    }

    /// Flip a label selection
    pub fn toggle_label(&mut self, label: &str, view: &mut dyn SessionView) {
        self.filters.toggle_label(label);
        view.filters_changed(&self.filters.summary());
    }

    /// Select the single active content type
    pub fn set_content_type(&mut self, content_type: ContentType, view: &mut dyn SessionView) {
        self.filters.set_content_type(content_type);
        view.filters_changed(&self.filters.summary());
    }

    /// Flip a category selection
    pub fn toggle_category(&mut self, category: &str, view: &mut dyn SessionView) {
        self.filters.toggle_category(category);
        view.filters_changed(&self.filters.summary());
    }

    /// Flip a publication id selection
    pub fn toggle_publisher(&mut self, publisher: u64, view: &mut dyn SessionView) {
        self.filters.toggle_publisher(publisher);
        view.filters_changed(&self.filters.summary());
    }

    /// Set or clear the start of the date range
    pub fn set_start_date(&mut self, date: Option<NaiveDate>, view: &mut dyn SessionView) {
        self.filters.set_start_date(date);
        view.filters_changed(&self.filters.summary());
    }

    /// Set or clear the end of the date range
    pub fn set_end_date(&mut self, date: Option<NaiveDate>, view: &mut dyn SessionView) {
        self.filters.set_end_date(date);
        view.filters_changed(&self.filters.summary());
    }

    /// Reset every filter dimension and the query text to the defaults
    ///
    /// The result store is left alone; the next search starts from page 0
    /// because loading a result set always resets the cursor.
    pub fn clear_filters(&mut self, view: &mut dyn SessionView) {
        self.filters.clear();
        self.query_text.clear();
        view.filters_changed(&self.filters.summary());
    }

    // --- search ----------------------------------------------------------

    /// Start a search for the current filters and query text
    ///
    /// Returns the sequence token and the request to send, or `None` when a
    /// request is already in flight. Locks the input and notifies the view.
    pub fn begin_search(&mut self, view: &mut dyn SessionView) -> Option<(u64, SearchRequest)> {
        if self.input_locked {
            return None;
        }
        self.input_locked = true;
        self.seq += 1;
        self.phase = Phase::Loading { seq: self.seq };
        view.search_started();
        Some((self.seq, build_request(&self.filters, &self.query_text)))
    }

    /// Apply the outcome of a search started with `begin_search`
    ///
    /// A response whose token is no longer current is discarded without any
    /// state change: the latest issued search wins, not the last to finish.
    /// On success the store is reloaded and the first page rendered; on
    /// failure the store keeps its previous contents and the error is
    /// surfaced through the view. The input is unlocked either way.
    pub fn apply_search_result(
        &mut self,
        seq: u64,
        result: Result<Vec<Article>, ApiError>,
        view: &mut dyn SessionView,
    ) {
        if seq != self.seq {
            debug!(
                target: TARGET_API_REQUEST,
                "Discarding stale search response (token {seq}, current {})", self.seq
            );
            return;
        }

        self.input_locked = false;
        match result {
            Ok(articles) => {
                self.store.load(articles);
                self.phase = Phase::Displaying;
                view.page_rendered(&self.store.current_page());
            }
            Err(error) => {
                warn!(target: TARGET_API_REQUEST, "Search failed: {error}");
                self.phase = Phase::Failed {
                    message: error.to_string(),
                };
                view.search_failed(&error);
            }
        }
    }

    /// Run a full search round trip against `api`
    pub async fn run_search<A: SearchApi>(&mut self, api: &A, view: &mut dyn SessionView) {
        let Some((seq, request)) = self.begin_search(view) else {
            return;
        };
        let result = api.search(&request).await;
        self.apply_search_result(seq, result, view);
    }

    // --- pagination ------------------------------------------------------

    /// Advance one page and re-render; no-op at the last page
    pub fn next_page(&mut self, view: &mut dyn SessionView) {
        if self.store.next_page() {
            view.page_rendered(&self.store.current_page());
        }
    }

    /// Retreat one page and re-render; no-op at page 0
    pub fn prev_page(&mut self, view: &mut dyn SessionView) {
        if self.store.prev_page() {
            view.page_rendered(&self.store.current_page());
        }
    }

    // --- example query ---------------------------------------------------

    /// Request an example query from the service
    ///
    /// Independent of the search lifecycle: it locks the input around the
    /// round trip and mutates only the query text. Filters and results are
    /// untouched.
    pub async fn run_suggest<A: SearchApi>(&mut self, api: &A, view: &mut dyn SessionView) {
        if self.input_locked {
            return;
        }
        self.input_locked = true;
        view.suggest_started();

        let result = api.suggest_query().await;
        self.input_locked = false;
        match result {
            Ok(query) => {
                self.query_text = query;
                view.query_suggested(&self.query_text);
            }
            Err(error) => {
                warn!(target: TARGET_API_REQUEST, "Example query failed: {error}");
                view.suggest_failed(&error);
            }
        }
    }

    // --- votes -----------------------------------------------------------

    /// Mark an article as trusted or untrusted
    ///
    /// Fire-and-forget: acknowledged through the view on success, logged on
    /// failure, never retried. Does not touch the search state machine.
    pub async fn vote<A: SearchApi>(
        &self,
        api: &A,
        article_id: i64,
        trusted: bool,
        view: &mut dyn SessionView,
    ) {
        match api.set_trusted(article_id, trusted).await {
            Ok(()) => view.vote_recorded(article_id, trusted),
            Err(error) => {
                warn!(target: TARGET_API_REQUEST, "Vote for article {article_id} failed: {error}");
            }
        }
    }
}
