//! Newsvet - search and vet news articles from the terminal
//!
//! This library implements the client-side engine behind the `newsvet`
//! binary: multi-dimensional filter state, deterministic search-request
//! serialization, and a paginated view over the result set returned by a
//! remote article-search service.
//!
//! # Architecture
//!
//! - `filters`: filter selections (labels, content type, categories, dates)
//! - `query`: filter state + query text -> search request parameters
//! - `results`: result storage and pagination
//! - `session`: request-lifecycle state machine driven by a UI adapter
//! - `api`: typed HTTP client for the remote service, plus a scripted mock
//! - `render`: article/page formatting for terminal display
//!
//! The engine is UI-agnostic: all user interaction goes through command
//! methods on [`session::SearchSession`] and rendering goes through the
//! [`session::SessionView`] trait, so the whole flow is testable without a
//! terminal or a network.

use thiserror::Error;

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filters;
pub mod logging;
pub mod query;
pub mod render;
pub mod results;
pub mod session;

/// Log target for outbound requests to the article service
pub const TARGET_API_REQUEST: &str = "api_request";

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum NewsvetError {
    /// Remote API error
    #[error("API error: {0}")]
    Api(#[from] api::ApiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Interactive prompt error
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    /// A one-shot search failed after the error was reported
    #[error("Search failed: {0}")]
    SearchFailed(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
