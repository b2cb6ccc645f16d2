//! Result storage and pagination
//!
//! Holds the full result set returned by the last search and a 0-based page
//! cursor over it. The stored order is exactly the order the server returned
//! (relevance-ranked); nothing here re-sorts. Loading a new result set
//! always resets the cursor to the first page.
//!
//! An empty store distinguishes "no search yet" from "searched, zero hits"
//! via [`ResultStore::has_searched`]; both render the same empty view.

use crate::api::Article;

/// Default number of articles per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The articles from the last search plus the current page cursor
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    articles: Vec<Article>,
    page: usize,
    page_size: usize,
    has_searched: bool,
}

/// One page of results, borrowed from the store
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    /// The articles on this page, in server order
    pub articles: &'a [Article],
    /// 0-based page index
    pub page: usize,
    /// Total number of pages
    pub page_count: usize,
    /// Total number of results across all pages
    pub total: usize,
    /// Index of the first article on this page within the result set
    pub start: usize,
    /// Whether a "Previous" control should be offered
    pub has_prev: bool,
    /// Whether a "Next" control should be offered
    pub has_next: bool,
}

impl ResultStore {
    /// Create an empty store with the given page size
    ///
    /// A page size of zero is treated as one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            articles: Vec::new(),
            page: 0,
            page_size: page_size.max(1),
            has_searched: false,
        }
    }

    /// Replace the result set and reset the cursor to page 0
    pub fn load(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        self.page = 0;
        self.has_searched = true;
    }

    /// Total number of stored results
    #[must_use]
    pub const fn total(&self) -> usize {
        self.articles.len()
    }

    /// Current 0-based page index
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Number of pages, `ceil(total / page_size)`
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.articles.len().div_ceil(self.page_size)
    }

    /// Whether any search has completed successfully
    #[must_use]
    pub const fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// Whether a page precedes the current one
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// Whether a page follows the current one
    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.page + 1) * self.page_size < self.articles.len()
    }

    /// The slice of results for the current page
    #[must_use]
    pub fn current_page(&self) -> PageView<'_> {
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(self.articles.len());
        let articles = if start < self.articles.len() {
            &self.articles[start..end]
        } else {
            &[]
        };

        PageView {
            articles,
            page: self.page,
            page_count: self.page_count(),
            total: self.articles.len(),
            start,
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }

    /// Advance to the next page; no-op at the last page
    ///
    /// Returns whether the cursor moved.
    pub const fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Retreat to the previous page; no-op at page 0
    ///
    /// Returns whether the cursor moved.
    pub const fn prev_page(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Article;

    fn articles(count: usize) -> Vec<Article> {
        (0..count)
            .map(|i| Article {
                id: i as i64,
                title: format!("Article {i}"),
                ..Article::default()
            })
            .collect()
    }

    #[test]
    fn test_load_resets_page_to_zero() {
        let mut store = ResultStore::new(10);
        store.load(articles(25));
        store.next_page();
        assert_eq!(store.page(), 1);

        store.load(articles(5));
        assert_eq!(store.page(), 0);
        assert_eq!(store.total(), 5);
    }

    #[test]
    fn test_empty_store_distinguishes_unsearched_from_zero_hits() {
        let mut store = ResultStore::new(10);
        assert!(!store.has_searched());
        assert_eq!(store.total(), 0);

        store.load(Vec::new());
        assert!(store.has_searched());
        assert_eq!(store.total(), 0);
        assert!(store.current_page().articles.is_empty());
    }

    #[test]
    fn test_page_slices_cover_the_result_set() {
        let mut store = ResultStore::new(10);
        store.load(articles(25));

        let page = store.current_page();
        assert_eq!(page.articles.len(), 10);
        assert_eq!(page.articles[0].id, 0);
        assert_eq!(page.start, 0);

        store.next_page();
        let page = store.current_page();
        assert_eq!(page.articles[0].id, 10);
        assert_eq!(page.articles[9].id, 19);

        store.next_page();
        let page = store.current_page();
        assert_eq!(page.articles.len(), 5);
        assert_eq!(page.articles[4].id, 24);
    }

    #[test]
    fn test_next_page_is_a_noop_at_the_last_page() {
        let mut store = ResultStore::new(10);
        store.load(articles(25));

        assert!(store.next_page());
        assert!(store.next_page());
        assert!(!store.next_page());
        assert_eq!(store.page(), 2);
    }

    #[test]
    fn test_prev_page_is_a_noop_at_page_zero() {
        let mut store = ResultStore::new(10);
        store.load(articles(25));

        assert!(!store.prev_page());
        assert_eq!(store.page(), 0);

        store.next_page();
        assert!(store.prev_page());
        assert_eq!(store.page(), 0);
    }

    #[test]
    fn test_control_presence_at_boundaries() {
        let mut store = ResultStore::new(10);
        store.load(articles(25));

        let page = store.current_page();
        assert!(!page.has_prev);
        assert!(page.has_next);

        store.next_page();
        let page = store.current_page();
        assert!(page.has_prev);
        assert!(page.has_next);

        store.next_page();
        let page = store.current_page();
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn test_page_count_rounds_up() {
        let mut store = ResultStore::new(10);
        assert_eq!(store.page_count(), 0);

        store.load(articles(10));
        assert_eq!(store.page_count(), 1);

        store.load(articles(11));
        assert_eq!(store.page_count(), 2);
    }

    #[test]
    fn test_exact_multiple_has_no_phantom_page() {
        let mut store = ResultStore::new(10);
        store.load(articles(20));

        store.next_page();
        assert!(!store.has_next());
        assert_eq!(store.current_page().articles.len(), 10);
    }
}
