//! Command handlers for the newsvet CLI
//!
//! One handler per subcommand, dispatched from `main`. The search and
//! interactive handlers drive a [`crate::session::SearchSession`]; the
//! small handlers talk to the service directly.

mod interactive;
mod search;
mod terminal;

pub use interactive::handle_interactive_command;
pub use search::handle_search_command;
pub use terminal::TerminalView;

use crate::NewsvetError;
use crate::api::SearchApi;
use crate::cli::ConfigCommands;
use crate::config::NewsvetConfig;

/// Handle the suggest command - print a service-generated example query
///
/// # Errors
///
/// Returns `NewsvetError::Api` if the service call fails.
pub async fn handle_suggest_command<A: SearchApi>(
    api: &A,
    quiet: bool,
) -> Result<(), NewsvetError> {
    let query = api.suggest_query().await?;
    if quiet {
        println!("{query}");
    } else {
        println!("Suggested query: {query}");
    }
    Ok(())
}

/// Handle the stats command - print the service's article count
///
/// # Errors
///
/// Returns `NewsvetError::Api` if the service call fails.
pub async fn handle_stats_command<A: SearchApi>(api: &A, quiet: bool) -> Result<(), NewsvetError> {
    let stats = api.stats().await?;
    if quiet {
        println!("{}", stats.count);
    } else {
        println!("{} article(s) indexed", stats.count);
    }
    Ok(())
}

/// Handle the config command - get and set application settings
///
/// # Errors
///
/// Returns `NewsvetError` if the key is unknown, the value does not parse,
/// or the configuration cannot be saved.
pub fn handle_config_command(
    mut config: NewsvetConfig,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<(), NewsvetError> {
    match command {
        ConfigCommands::Set { setting } => {
            let Some((key, value)) = setting.split_once('=') else {
                return Err(NewsvetError::InvalidInput(
                    "Invalid format. Use: newsvet config set key=value".into(),
                ));
            };

            let key = key.trim();
            let value = value.trim();
            match key {
                "api_base_url" => config.api_base_url = value.to_string(),
                "page_size" => {
                    config.page_size = value.parse().map_err(|_| {
                        NewsvetError::InvalidInput(format!(
                            "Invalid value for page_size: '{value}'. Use a positive integer"
                        ))
                    })?;
                }
                "quiet" => {
                    config.quiet = value.parse().map_err(|_| {
                        NewsvetError::InvalidInput(format!(
                            "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                        ))
                    })?;
                }
                _ => {
                    return Err(NewsvetError::InvalidInput(format!(
                        "Unknown configuration key: '{key}'. Available keys: api_base_url, page_size, quiet"
                    )));
                }
            }
            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => match key.as_str() {
            "api_base_url" => println!("{}", config.api_base_url),
            "page_size" => println!("{}", config.page_size),
            "quiet" => println!("{}", config.quiet),
            _ => {
                return Err(NewsvetError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: api_base_url, page_size, quiet"
                )));
            }
        },
    }
    Ok(())
}
