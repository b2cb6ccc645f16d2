//! Filter state and mutation operations

use chrono::NaiveDate;

use super::types::{ContentType, DateRange, FilterSummary};

/// The current values of every filter dimension
///
/// Created once at startup with all labels selected and mutated in place by
/// user actions. [`FilterState::clear`] resets every dimension to its
/// initial default; the state is never replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// The full, fixed set of known labels, in display order
    universe: Vec<String>,
    /// Currently selected labels, in selection order
    labels: Vec<String>,
    content_type: ContentType,
    /// Selected categories, in selection order
    categories: Vec<String>,
    /// Selected publication ids, in selection order
    publishers: Vec<u64>,
    dates: DateRange,
}

impl FilterState {
    /// Create a filter state with every label in `universe` selected
    #[must_use]
    pub fn new(universe: Vec<String>) -> Self {
        let labels = universe.clone();
        Self {
            universe,
            labels,
            content_type: ContentType::default(),
            categories: Vec::new(),
            publishers: Vec::new(),
            dates: DateRange::default(),
        }
    }

    /// Flip membership of `label` in the selected set
    ///
    /// Unknown labels are added and removed as given; the server ignores
    /// ids it does not recognize.
    pub fn toggle_label(&mut self, label: &str) {
        if let Some(pos) = self.labels.iter().position(|l| l == label) {
            self.labels.remove(pos);
        } else {
            self.labels.push(label.to_string());
        }
    }

    /// Set the single active content type, replacing any previous one
    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.content_type = content_type;
    }

    /// Flip membership of `category` in the selected set
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category.to_string());
        }
    }

    /// Flip membership of a publication id in the selected set
    pub fn toggle_publisher(&mut self, publisher: u64) {
        if let Some(pos) = self.publishers.iter().position(|&p| p == publisher) {
            self.publishers.remove(pos);
        } else {
            self.publishers.push(publisher);
        }
    }

    /// Set or clear the start of the date range
    pub const fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.dates.start = date;
    }

    /// Set or clear the end of the date range
    pub const fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.dates.end = date;
    }

    /// Reset every dimension to its initial default
    ///
    /// Labels return to the full universe in universe order, the content
    /// type to `All`, and categories, publishers and dates to empty.
    pub fn clear(&mut self) {
        self.labels = self.universe.clone();
        self.content_type = ContentType::All;
        self.categories.clear();
        self.publishers.clear();
        self.dates = DateRange::default();
    }

    /// Selected labels in selection order
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The configured label universe in display order
    #[must_use]
    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    /// Whether `label` is currently selected
    #[must_use]
    pub fn is_label_selected(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// The active content type
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Selected categories in selection order
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Selected publication ids in selection order
    #[must_use]
    pub fn publishers(&self) -> &[u64] {
        &self.publishers
    }

    /// The current date bounds
    #[must_use]
    pub const fn dates(&self) -> DateRange {
        self.dates
    }

    /// Selection counts for UI counters
    #[must_use]
    pub fn summary(&self) -> FilterSummary {
        FilterSummary {
            selected_labels: self.labels.len(),
            universe_size: self.universe.len(),
            selected_categories: self.categories.len(),
            selected_publishers: self.publishers.len(),
            content_type: self.content_type,
            dates_set: self.dates.is_set(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe() -> Vec<String> {
        vec!["left".into(), "center".into(), "right".into()]
    }

    #[test]
    fn test_new_starts_with_all_labels_selected() {
        let state = FilterState::new(universe());

        assert_eq!(state.labels(), universe().as_slice());
        assert_eq!(state.content_type(), ContentType::All);
        assert!(state.categories().is_empty());
        assert!(state.publishers().is_empty());
        assert!(!state.dates().is_set());
    }

    #[test]
    fn test_toggle_label_twice_restores_membership() {
        let mut state = FilterState::new(universe());

        state.toggle_label("center");
        assert!(!state.is_label_selected("center"));

        state.toggle_label("center");
        assert!(state.is_label_selected("center"));
    }

    #[test]
    fn test_reselected_label_moves_to_end() {
        let mut state = FilterState::new(universe());

        state.toggle_label("left");
        state.toggle_label("left");

        assert_eq!(state.labels(), ["center", "right", "left"]);
    }

    #[test]
    fn test_toggle_unknown_label_is_added_verbatim() {
        let mut state = FilterState::new(universe());

        state.toggle_label("satire");
        assert!(state.is_label_selected("satire"));
        assert_eq!(state.labels().len(), 4);

        state.toggle_label("satire");
        assert!(!state.is_label_selected("satire"));
    }

    #[test]
    fn test_set_content_type_is_mutually_exclusive() {
        let mut state = FilterState::new(universe());

        state.set_content_type(ContentType::PressReleases);
        assert_eq!(state.content_type(), ContentType::PressReleases);

        state.set_content_type(ContentType::NewsArticles);
        assert_eq!(state.content_type(), ContentType::NewsArticles);
    }

    #[test]
    fn test_toggle_category_preserves_insertion_order() {
        let mut state = FilterState::new(universe());

        state.toggle_category("politics");
        state.toggle_category("science");
        state.toggle_category("health");
        state.toggle_category("science");

        assert_eq!(state.categories(), ["politics", "health"]);
    }

    #[test]
    fn test_date_sides_are_independent() {
        let mut state = FilterState::new(universe());
        let day = NaiveDate::from_ymd_opt(2025, 2, 26).unwrap();

        state.set_end_date(Some(day));
        assert_eq!(state.dates().start, None);
        assert_eq!(state.dates().end, Some(day));

        state.set_end_date(None);
        assert!(!state.dates().is_set());
    }

    #[test]
    fn test_clear_resets_every_dimension() {
        let mut state = FilterState::new(universe());
        state.toggle_label("left");
        state.set_content_type(ContentType::PressReleases);
        state.toggle_category("politics");
        state.toggle_publisher(42);
        state.set_start_date(NaiveDate::from_ymd_opt(2025, 1, 1));

        state.clear();

        assert_eq!(state.labels(), universe().as_slice());
        assert_eq!(state.content_type(), ContentType::All);
        assert!(state.categories().is_empty());
        assert!(state.publishers().is_empty());
        assert!(!state.dates().is_set());
    }

    #[test]
    fn test_summary_counts_track_mutations() {
        let mut state = FilterState::new(universe());
        state.toggle_label("left");
        state.toggle_category("politics");

        let summary = state.summary();
        assert_eq!(summary.selected_labels, 2);
        assert_eq!(summary.universe_size, 3);
        assert_eq!(summary.selected_categories, 1);
        assert!(!summary.dates_set);
    }
}
