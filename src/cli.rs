//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for newsvet using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **interactive**: menu-driven search session (default)
//! - **search**: run a single search and print the results
//! - **suggest**: ask the service for an example query
//! - **stats**: show how many articles the service has indexed
//! - **config**: manage application settings
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--base-url` override for the configured service address
//! - Command aliases (e.g. `s` for `search`)

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::filters::ContentType;

/// Search and vet news articles from the terminal
#[derive(Debug, Parser)]
#[command(name = "newsvet", version, about)]
pub struct Cli {
    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log outbound requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the configured API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The selected command, defaulting to the interactive session
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }
}

/// Available commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Menu-driven search session (default)
    #[command(visible_alias = "i")]
    Interactive,

    /// Run a single search and print the results
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Ask the service for an example query
    Suggest,

    /// Show how many articles the service has indexed
    Stats,

    /// Manage application settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Content type choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ContentTypeArg {
    /// No content-type restriction
    #[default]
    All,
    /// News articles only
    News,
    /// Press releases only
    Press,
}

impl From<ContentTypeArg> for ContentType {
    fn from(arg: ContentTypeArg) -> Self {
        match arg {
            ContentTypeArg::All => Self::All,
            ContentTypeArg::News => Self::NewsArticles,
            ContentTypeArg::Press => Self::PressReleases,
        }
    }
}

/// Parameters for the search command
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Free-text query (may be empty)
    #[arg(default_value = "")]
    pub query: String,

    /// Restrict results to these labels (repeatable; defaults to all)
    #[arg(short, long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Restrict results to these categories (repeatable)
    #[arg(short, long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Restrict results to one content type
    #[arg(short = 't', long = "type", value_enum, default_value_t)]
    pub content_type: ContentTypeArg,

    /// Earliest publication date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,

    /// Latest publication date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,

    /// Restrict results to these publication ids (repeatable)
    #[arg(long = "publisher", value_name = "ID")]
    pub publishers: Vec<u64>,

    /// Result page to display (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Print every result page instead of a single one
    #[arg(long)]
    pub all_pages: bool,
}

/// Configuration subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// Set a configuration value (key=value)
    Set {
        /// Setting in `key=value` form
        setting: String,
    },
    /// Print a configuration value
    Get {
        /// Setting key
        key: String,
    },
}
