//! Terminal implementation of the session view

use colored::Colorize;

use crate::api::ApiError;
use crate::filters::FilterSummary;
use crate::render;
use crate::results::PageView;
use crate::session::SessionView;

/// Session view that prints to the terminal
///
/// Result pages and vote acknowledgments always print; progress notes and
/// filter counters are suppressed in quiet mode. Errors go to stderr.
pub struct TerminalView {
    quiet: bool,
}

impl TerminalView {
    /// Create a terminal view
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl SessionView for TerminalView {
    fn filters_changed(&mut self, summary: &FilterSummary) {
        if self.quiet {
            return;
        }
        let dates = if summary.dates_set { ", dates set" } else { "" };
        let line = format!(
            "{}/{} labels, {} categories, {} publishers, type: {}{dates}",
            summary.selected_labels,
            summary.universe_size,
            summary.selected_categories,
            summary.selected_publishers,
            summary.content_type.label(),
        );
        println!("{}", line.dimmed());
    }

    fn search_started(&mut self) {
        if !self.quiet {
            println!("{}", "Searching...".dimmed());
        }
    }

    fn page_rendered(&mut self, page: &PageView<'_>) {
        println!("{}", render::format_page(page));
    }

    fn search_failed(&mut self, error: &ApiError) {
        eprintln!("{}", format!("Search failed: {error}").red());
    }

    fn suggest_started(&mut self) {
        if !self.quiet {
            println!("{}", "Generating example query...".dimmed());
        }
    }

    fn query_suggested(&mut self, query: &str) {
        println!("Suggested query: {query}");
    }

    fn suggest_failed(&mut self, error: &ApiError) {
        eprintln!("{}", format!("Example query failed: {error}").red());
    }

    fn vote_recorded(&mut self, article_id: i64, trusted: bool) {
        let verdict = if trusted { "trusted" } else { "untrusted" };
        println!("Article #{article_id} has been marked as {verdict}.");
    }
}
