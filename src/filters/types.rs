//! Supporting types for filter state

use chrono::NaiveDate;

/// Coarse article kind filter
///
/// Exactly one variant is active at a time. `All` is the default and means
/// no restriction; it is never sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// No content-type restriction
    #[default]
    All,
    /// News articles only
    NewsArticles,
    /// Press releases only
    PressReleases,
}

impl ContentType {
    /// The token sent on the wire, or `None` for the default
    ///
    /// These are fixed protocol tokens, distinct from the display labels.
    #[must_use]
    pub const fn wire_token(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::NewsArticles => Some("news_articles"),
            Self::PressReleases => Some("press_releases"),
        }
    }

    /// Human-readable label for menus and summaries
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::NewsArticles => "News articles",
            Self::PressReleases => "Press releases",
        }
    }
}

/// Optional publication date bounds
///
/// Neither side constrains the other; start may exceed end, which the
/// server resolves (to an empty result set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    /// Earliest publication date, inclusive
    pub start: Option<NaiveDate>,
    /// Latest publication date, inclusive
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Whether either bound is set
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

/// Snapshot of selection counts for UI counters
///
/// Produced after every mutation so the adapter layer can refresh its
/// "(n selected)" style indicators without reaching into the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    /// Number of labels currently selected
    pub selected_labels: usize,
    /// Size of the configured label universe
    pub universe_size: usize,
    /// Number of categories currently selected
    pub selected_categories: usize,
    /// Number of publisher ids currently selected
    pub selected_publishers: usize,
    /// The active content type
    pub content_type: ContentType,
    /// Whether any date bound is set
    pub dates_set: bool,
}
