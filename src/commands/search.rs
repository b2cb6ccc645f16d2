//! One-shot search command

use crate::NewsvetError;
use crate::api::SearchApi;
use crate::cli::SearchArgs;
use crate::config::NewsvetConfig;
use crate::render;
use crate::session::{Phase, SearchSession, SessionView};

/// View that stays quiet during setup and page navigation
struct SilentView;

impl SessionView for SilentView {}

/// Handle the search command - run one search and print the results
///
/// Builds a fresh session from the configured label universe, applies the
/// command-line filters, runs a single round trip and prints the requested
/// page (or every page with `--all-pages`).
///
/// # Errors
///
/// Returns `NewsvetError::SearchFailed` if the service call fails.
pub async fn handle_search_command<A: SearchApi>(
    api: &A,
    config: &NewsvetConfig,
    args: &SearchArgs,
    quiet: bool,
) -> Result<(), NewsvetError> {
    let mut session = SearchSession::new(config.labels.clone(), config.page_size);
    let mut silent = SilentView;
    apply_filters(&mut session, args, &mut silent);

    // The session renders through its view as soon as the response lands;
    // the one-shot flow keeps that silent, navigates to the requested page
    // and prints exactly once.
    let Some((seq, request)) = session.begin_search(&mut silent) else {
        return Ok(());
    };
    if !quiet {
        println!("Searching...");
    }
    let result = api.search(&request).await;
    session.apply_search_result(seq, result, &mut silent);

    if let Phase::Failed { message } = session.phase() {
        return Err(NewsvetError::SearchFailed(message.clone()));
    }

    let target = args.page.saturating_sub(1);
    while session.store().page() < target && session.store().has_next() {
        session.next_page(&mut silent);
    }

    println!("{}", render::format_page(&session.store().current_page()));

    if args.all_pages {
        loop {
            let before = session.store().page();
            session.next_page(&mut silent);
            if session.store().page() == before {
                break;
            }
            println!("\n{}", render::format_page(&session.store().current_page()));
        }
    }

    Ok(())
}

/// Apply command-line filter arguments to a fresh session
///
/// An explicit label list replaces the default all-selected state: labels
/// outside the list are deselected and unknown labels are selected as
/// given, in list order.
fn apply_filters(session: &mut SearchSession, args: &SearchArgs, view: &mut dyn SessionView) {
    session.set_query(&args.query);

    if !args.labels.is_empty() {
        let universe = session.filters().universe().to_vec();
        for label in &universe {
            if !args.labels.contains(label) {
                session.toggle_label(label, view);
            }
        }
        for label in &args.labels {
            if !universe.contains(label) {
                session.toggle_label(label, view);
            }
        }
    }

    for category in &args.categories {
        session.toggle_category(category, view);
    }
    for publisher in &args.publishers {
        session.toggle_publisher(*publisher, view);
    }
    session.set_content_type(args.content_type.into(), view);
    session.set_start_date(args.from, view);
    session.set_end_date(args.to, view);
}
