//! Newsvet CLI application entry point
//!
//! This is the main executable for newsvet, a terminal client for a remote
//! article-search service with trust scoring.
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (default command)
//! newsvet
//! newsvet interactive
//!
//! # One-shot search
//! newsvet search "renewable energy" -l liberal -l mainstream --type news
//!
//! # Second result page, every page
//! newsvet search "renewable energy" -p 2
//! newsvet search "renewable energy" --all-pages
//!
//! # Ask the service for an example query
//! newsvet suggest
//!
//! # Index statistics
//! newsvet stats
//!
//! # Settings
//! newsvet config set api_base_url=http://news.example.org/api/articles
//! newsvet config get page_size
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/newsvet/config.toml` on Linux) and cover the API base URL,
//! the result page size and the label universe offered for filtering.

use newsvet::{
    NewsvetError,
    api::HttpApi,
    cli::{Cli, Commands},
    commands, config, logging,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), NewsvetError> {
    let cli = Cli::parse_args();
    logging::configure_logging(cli.verbose);

    let config = config::NewsvetConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return commands::handle_config_command(config, command, quiet);
    }

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.api_base_url.clone());
    let api = HttpApi::new(&base_url)?;

    match &command {
        Commands::Interactive => commands::handle_interactive_command(&api, &config, quiet).await?,
        Commands::Search(args) => commands::handle_search_command(&api, &config, args, quiet).await?,
        Commands::Suggest => commands::handle_suggest_command(&api, quiet).await?,
        Commands::Stats => commands::handle_stats_command(&api, quiet).await?,
        Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
