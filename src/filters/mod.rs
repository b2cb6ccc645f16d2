//! Filter state for article searches
//!
//! This module holds the selections a user builds up before submitting a
//! search: label filters, content type, free-form categories, publisher ids
//! and a date range. It is pure data with mutation operations; turning the
//! state into request parameters is the `query` module's job, and nothing in
//! here performs I/O.
//!
//! # Semantics
//!
//! - Labels start out all-selected (the configured universe) and toggle
//!   individually. Selection order is preserved: a label deselected and then
//!   reselected moves to the end of the set.
//! - Exactly one content type is active at a time, defaulting to "all".
//! - Categories and publishers are plain insertion-ordered sets; empty means
//!   "no constraint".
//! - Each side of the date range is independently optional.

mod state;
mod types;

pub use state::FilterState;
pub use types::{ContentType, DateRange, FilterSummary};
