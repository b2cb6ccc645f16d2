//! Interactive search session
//!
//! A menu-driven loop over the search session: edit the query, toggle
//! filters, search, page through results and vote on articles. Pagination
//! entries only appear when the corresponding page exists, so an
//! out-of-range request cannot be issued.

use std::collections::HashSet;

use chrono::NaiveDate;
use colored::Colorize;
use dialoguer::{Input, MultiSelect, Select};

use crate::NewsvetError;
use crate::api::SearchApi;
use crate::commands::terminal::TerminalView;
use crate::config::NewsvetConfig;
use crate::filters::ContentType;
use crate::session::SearchSession;

/// Menu entries, matched against the dynamically built item list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    EditQuery,
    Search,
    PrevPage,
    NextPage,
    Vote,
    Suggest,
    Labels,
    Category,
    ContentType,
    Dates,
    Publisher,
    ClearFilters,
    Stats,
    Quit,
}

/// Build the menu for the current session state
fn menu(session: &SearchSession) -> Vec<(MenuAction, String)> {
    let mut items = vec![
        (
            MenuAction::EditQuery,
            format!("Edit query [{}]", session.query_text()),
        ),
        (MenuAction::Search, "Search".to_string()),
    ];

    if session.store().has_prev() {
        items.push((MenuAction::PrevPage, "Previous page".to_string()));
    }
    if session.store().has_next() {
        items.push((MenuAction::NextPage, "Next page".to_string()));
    }
    if session.store().has_searched() && session.store().total() > 0 {
        items.push((MenuAction::Vote, "Vote on an article".to_string()));
    }

    items.extend([
        (MenuAction::Suggest, "Generate example query".to_string()),
        (MenuAction::Labels, "Select labels".to_string()),
        (MenuAction::Category, "Toggle a category".to_string()),
        (MenuAction::ContentType, "Content type".to_string()),
        (MenuAction::Dates, "Date range".to_string()),
        (MenuAction::Publisher, "Toggle a publisher id".to_string()),
        (MenuAction::ClearFilters, "Clear all filters".to_string()),
        (MenuAction::Stats, "Index statistics".to_string()),
        (MenuAction::Quit, "Quit".to_string()),
    ]);

    items
}

/// Prompt for an optional date, accepting an empty answer as "unset"
fn prompt_date(prompt: &str, current: Option<NaiveDate>) -> Result<Option<NaiveDate>, NewsvetError> {
    let initial = current.map_or_else(String::new, |date| date.format("%Y-%m-%d").to_string());
    let answer: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(|value: &String| {
            if value.trim().is_empty() || value.trim().parse::<NaiveDate>().is_ok() {
                Ok(())
            } else {
                Err("expected YYYY-MM-DD or empty")
            }
        })
        .interact_text()?;

    Ok(answer.trim().parse::<NaiveDate>().ok())
}

/// Handle the interactive command - a menu loop over the search session
///
/// # Errors
///
/// Returns `NewsvetError` only for prompt/terminal failures; service errors
/// are reported inline and the loop continues.
pub async fn handle_interactive_command<A: SearchApi>(
    api: &A,
    config: &NewsvetConfig,
    quiet: bool,
) -> Result<(), NewsvetError> {
    let mut session = SearchSession::new(config.labels.clone(), config.page_size);
    let mut view = TerminalView::new(quiet);

    loop {
        let items = menu(&session);
        let labels: Vec<&str> = items.iter().map(|(_, label)| label.as_str()).collect();
        let choice = Select::new()
            .with_prompt("newsvet")
            .items(&labels)
            .default(0)
            .interact()?;

        match items[choice].0 {
            MenuAction::EditQuery => {
                let query: String = Input::new()
                    .with_prompt("Query")
                    .with_initial_text(session.query_text().to_string())
                    .allow_empty(true)
                    .interact_text()?;
                session.set_query(&query);
            }
            MenuAction::Search => session.run_search(api, &mut view).await,
            MenuAction::PrevPage => session.prev_page(&mut view),
            MenuAction::NextPage => session.next_page(&mut view),
            MenuAction::Vote => {
                let article_id: i64 = Input::new().with_prompt("Article id").interact_text()?;
                let verdict = Select::new()
                    .with_prompt("Verdict")
                    .items(&["Trusted", "Untrusted"])
                    .default(0)
                    .interact()?;
                session.vote(api, article_id, verdict == 0, &mut view).await;
            }
            MenuAction::Suggest => session.run_suggest(api, &mut view).await,
            MenuAction::Labels => {
                let universe = session.filters().universe().to_vec();
                let defaults: Vec<bool> = universe
                    .iter()
                    .map(|label| session.filters().is_label_selected(label))
                    .collect();
                let chosen: HashSet<usize> = MultiSelect::new()
                    .with_prompt("Labels (space toggles, enter confirms)")
                    .items(&universe)
                    .defaults(&defaults)
                    .interact()?
                    .into_iter()
                    .collect();
                for (index, label) in universe.iter().enumerate() {
                    if chosen.contains(&index) != session.filters().is_label_selected(label) {
                        session.toggle_label(label, &mut view);
                    }
                }
            }
            MenuAction::Category => {
                let category: String = Input::new()
                    .with_prompt("Category")
                    .allow_empty(true)
                    .interact_text()?;
                if !category.trim().is_empty() {
                    session.toggle_category(category.trim(), &mut view);
                }
            }
            MenuAction::ContentType => {
                let types = [
                    ContentType::All,
                    ContentType::NewsArticles,
                    ContentType::PressReleases,
                ];
                let type_labels: Vec<&str> = types.iter().map(|t| t.label()).collect();
                let selected = Select::new()
                    .with_prompt("Content type")
                    .items(&type_labels)
                    .default(0)
                    .interact()?;
                session.set_content_type(types[selected], &mut view);
            }
            MenuAction::Dates => {
                let start = prompt_date("Start date", session.filters().dates().start)?;
                session.set_start_date(start, &mut view);
                let end = prompt_date("End date", session.filters().dates().end)?;
                session.set_end_date(end, &mut view);
            }
            MenuAction::Publisher => {
                let publisher: u64 = Input::new().with_prompt("Publication id").interact_text()?;
                session.toggle_publisher(publisher, &mut view);
            }
            MenuAction::ClearFilters => session.clear_filters(&mut view),
            MenuAction::Stats => match api.stats().await {
                Ok(stats) => println!("{} article(s) indexed", stats.count),
                Err(error) => eprintln!("{}", format!("Stats failed: {error}").red()),
            },
            MenuAction::Quit => break,
        }
    }

    Ok(())
}
