//! Terminal formatting for articles and result pages
//!
//! Implements the display contract for a page of results: per article a
//! title/link, a short formatted date (or the "Unknown Date" sentinel),
//! the trust factor bucketed into three colored tiers, the publisher, and
//! the article id used as the vote handle. The page footer carries the
//! total count and which pagination controls are available.

use chrono::NaiveDate;
use colored::Colorize;

use crate::api::Article;
use crate::results::PageView;

/// Sentinel shown when an article carries no usable timestamp
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Trust-factor display tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustTier {
    /// Rounded score of 3.9 or higher
    High,
    /// Rounded score between 2.5 and 3.8
    Medium,
    /// Everything below 2.5
    Low,
}

impl TrustTier {
    /// Bucket a raw 0-5 trust factor into its display tier
    ///
    /// Bucketing happens on the one-decimal display score, so a raw 3.85
    /// displays as 3.9 and lands in the high tier.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        let rounded = display_score(score);
        if rounded >= 3.9 {
            Self::High
        } else if rounded >= 2.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// The star glyph for this tier
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::High => "★",
            Self::Medium => "◐",
            Self::Low => "☆",
        }
    }

    /// Apply this tier's color to `text` (green, yellow or red)
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        match self {
            Self::High => text.green().to_string(),
            Self::Medium => text.yellow().to_string(),
            Self::Low => text.red().to_string(),
        }
    }
}

/// Round a trust factor to one decimal for display
#[must_use]
pub fn display_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

/// Format an article's date for display
///
/// Prefers the publication timestamp, falls back to the scan timestamp,
/// and renders [`UNKNOWN_DATE`] when neither yields a calendar date.
#[must_use]
pub fn format_date(published_at: Option<&str>, scanned_at: Option<&str>) -> String {
    published_at
        .and_then(parse_date)
        .or_else(|| scanned_at.and_then(parse_date))
        .map_or_else(
            || UNKNOWN_DATE.to_string(),
            |date| date.format("%b %-d, %Y").to_string(),
        )
}

/// Extract the calendar date from an ISO timestamp or date string
fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}

/// Format one article as display lines
#[must_use]
pub fn format_article(article: &Article) -> String {
    let date = format_date(article.published_at.as_deref(), article.scanned_at.as_deref());
    let tier = TrustTier::from_score(article.trust_factor);
    let score = tier.paint(&format!("{} {:.1}", tier.glyph(), display_score(article.trust_factor)));

    format!(
        "{}\n  {}\n  {}  {}  {}  (#{})",
        article.title.bold(),
        article.url.underline(),
        score,
        article.publisher.dimmed(),
        date.dimmed(),
        article.id,
    )
}

/// Format a whole result page, including count and pagination footer
#[must_use]
pub fn format_page(page: &PageView<'_>) -> String {
    if page.articles.is_empty() {
        return "No articles found.\n0 article(s)".to_string();
    }

    let mut out = String::new();
    for article in page.articles {
        out.push_str(&format_article(article));
        out.push_str("\n\n");
    }

    out.push_str(&format!(
        "{} article(s), page {}/{} (showing {}-{})",
        page.total,
        page.page + 1,
        page.page_count,
        page.start + 1,
        page.start + page.articles.len(),
    ));

    let mut controls = Vec::new();
    if page.has_prev {
        controls.push("previous");
    }
    if page.has_next {
        controls.push("next");
    }
    if !controls.is_empty() {
        out.push_str(&format!("  [{}]", controls.join(" | ")));
    }

    out
}
