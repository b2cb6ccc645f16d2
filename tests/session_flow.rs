//! Integration tests for the search session
//!
//! These tests drive the complete search workflow - filter state, request
//! serialization, the request lifecycle and pagination - against the
//! scripted mock service, without any network or terminal.

use newsvet::api::{ApiError, Article, MockApi};
use newsvet::filters::ContentType;
use newsvet::query::build_request;
use newsvet::session::{Phase, RecordingView, SearchSession, ViewEvent};

fn universe() -> Vec<String> {
    vec!["A".to_string(), "B".to_string(), "C".to_string()]
}

fn articles(count: usize) -> Vec<Article> {
    (0..count)
        .map(|i| Article {
            id: i as i64,
            title: format!("Article {i}"),
            publisher: "Example Times".to_string(),
            trust_factor: 3.0,
            ..Article::default()
        })
        .collect()
}

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

/// Scenario A: 25 articles paginate as 10/10/5 with matching controls
#[test]
fn test_pagination_over_twenty_five_articles() {
    let api = MockApi::new();
    api.queue_search(Ok(articles(25)));
    let mut session = SearchSession::new(universe(), 10);
    let mut view = RecordingView::new();

    block_on(session.run_search(&api, &mut view));

    let Some(ViewEvent::PageRendered {
        page,
        titles,
        has_prev,
        has_next,
        ..
    }) = view.last_page()
    else {
        panic!("expected a rendered page");
    };
    assert_eq!(*page, 0);
    assert_eq!(titles.first().map(String::as_str), Some("Article 0"));
    assert_eq!(titles.last().map(String::as_str), Some("Article 9"));
    assert!(!has_prev);
    assert!(has_next);

    session.next_page(&mut view);
    let Some(ViewEvent::PageRendered {
        titles,
        has_prev,
        has_next,
        ..
    }) = view.last_page()
    else {
        panic!("expected a rendered page");
    };
    assert_eq!(titles.first().map(String::as_str), Some("Article 10"));
    assert_eq!(titles.last().map(String::as_str), Some("Article 19"));
    assert!(has_prev);
    assert!(has_next);

    session.next_page(&mut view);
    let Some(ViewEvent::PageRendered {
        titles,
        has_prev,
        has_next,
        ..
    }) = view.last_page()
    else {
        panic!("expected a rendered page");
    };
    assert_eq!(titles.len(), 5);
    assert_eq!(titles.last().map(String::as_str), Some("Article 24"));
    assert!(has_prev);
    assert!(!has_next);

    // Advancing past the end neither moves nor re-renders.
    let renders = view.events.len();
    session.next_page(&mut view);
    assert_eq!(view.events.len(), renders);
}

/// Scenario B: deselecting one label sends the rest; reselecting drops cls
#[test]
fn test_label_filter_round_trip() {
    let api = MockApi::new();
    let mut session = SearchSession::new(universe(), 10);
    let mut view = RecordingView::new();

    session.toggle_label("B", &mut view);
    block_on(session.run_search(&api, &mut view));

    session.toggle_label("B", &mut view);
    block_on(session.run_search(&api, &mut view));

    let requests = api.search_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].get("cls"), Some("A,C"));
    assert_eq!(requests[1].get("cls"), None);
}

/// Scenario C: the press-releases token appears and disappears with the type
#[test]
fn test_content_type_round_trip() {
    let api = MockApi::new();
    let mut session = SearchSession::new(universe(), 10);
    let mut view = RecordingView::new();

    session.set_content_type(ContentType::PressReleases, &mut view);
    block_on(session.run_search(&api, &mut view));

    session.set_content_type(ContentType::All, &mut view);
    block_on(session.run_search(&api, &mut view));

    let requests = api.search_requests();
    assert_eq!(requests[0].get("tp"), Some("press_releases"));
    assert_eq!(requests[1].get("tp"), None);
}

/// Scenario D: a malformed payload leaves the display untouched and unlocked
#[test]
fn test_malformed_payload_keeps_previous_results() {
    let api = MockApi::new();
    api.queue_search(Ok(articles(12)));
    api.queue_search(Err(ApiError::UnexpectedPayload("an object")));
    let mut session = SearchSession::new(universe(), 10);
    let mut view = RecordingView::new();

    block_on(session.run_search(&api, &mut view));
    assert_eq!(session.store().total(), 12);

    block_on(session.run_search(&api, &mut view));

    assert_eq!(session.store().total(), 12);
    assert!(!session.is_input_locked());
    assert!(matches!(session.phase(), Phase::Failed { .. }));
    assert!(
        view.events
            .iter()
            .any(|event| matches!(event, ViewEvent::SearchFailed { .. }))
    );
}

/// A stale response must not overwrite a newer search
#[test]
fn test_stale_response_is_discarded() {
    let mut session = SearchSession::new(universe(), 10);
    let mut view = RecordingView::new();

    let (first, _) = session.begin_search(&mut view).unwrap();
    session.apply_search_result(first, Ok(articles(3)), &mut view);

    let (second, _) = session.begin_search(&mut view).unwrap();
    session.apply_search_result(second, Ok(articles(7)), &mut view);

    // The first request's response arrives again, late and out of order.
    session.apply_search_result(first, Ok(articles(99)), &mut view);

    assert_eq!(session.store().total(), 7);
    assert_eq!(session.phase(), &Phase::Displaying);
}

/// The query parameter is always present, and empty searches are valid
#[test]
fn test_empty_query_is_sent() {
    let api = MockApi::new();
    let mut session = SearchSession::new(universe(), 10);
    let mut view = RecordingView::new();

    block_on(session.run_search(&api, &mut view));

    assert_eq!(api.search_requests()[0].get("query"), Some(""));
}

/// Clearing filters returns the request to its unrestricted form
#[test]
fn test_clear_filters_resets_the_request() {
    let api = MockApi::new();
    let mut session = SearchSession::new(universe(), 10);
    let mut view = RecordingView::new();

    session.set_query("budget cuts");
    session.toggle_label("A", &mut view);
    session.toggle_category("politics", &mut view);
    session.set_content_type(ContentType::NewsArticles, &mut view);
    session.clear_filters(&mut view);

    block_on(session.run_search(&api, &mut view));

    let request = &api.search_requests()[0];
    assert_eq!(request.get("query"), Some(""));
    assert_eq!(request.get("cls"), None);
    assert_eq!(request.get("cat"), None);
    assert_eq!(request.get("tp"), None);
}

/// The suggestion flow fills the query text and nothing else
#[test]
fn test_suggestion_fills_query_text() {
    let api = MockApi::new();
    api.queue_suggestion(Ok("latest breakthroughs in fusion".to_string()));
    api.queue_search(Ok(articles(1)));
    let mut session = SearchSession::new(universe(), 10);
    let mut view = RecordingView::new();

    block_on(session.run_suggest(&api, &mut view));
    assert_eq!(session.query_text(), "latest breakthroughs in fusion");
    assert!(!session.store().has_searched());

    block_on(session.run_search(&api, &mut view));
    assert_eq!(
        api.search_requests()[0].get("query"),
        Some("latest breakthroughs in fusion")
    );
}

/// Votes reach the service keyed by article id and acknowledge once
#[test]
fn test_votes_are_fire_and_forget() {
    let api = MockApi::new();
    let session = SearchSession::new(universe(), 10);
    let mut view = RecordingView::new();

    block_on(session.vote(&api, 17, true, &mut view));
    block_on(session.vote(&api, 4, false, &mut view));

    assert_eq!(api.votes(), vec![(17, true), (4, false)]);
    assert_eq!(
        view.events,
        vec![
            ViewEvent::VoteRecorded {
                article_id: 17,
                trusted: true,
            },
            ViewEvent::VoteRecorded {
                article_id: 4,
                trusted: false,
            },
        ]
    );
}

/// Request serialization stays stable for a fully loaded filter state
#[test]
fn test_fully_loaded_request_shape() {
    use chrono::NaiveDate;
    use newsvet::filters::FilterState;

    let mut filters = FilterState::new(universe());
    filters.toggle_label("C");
    filters.toggle_category("science");
    filters.toggle_category("health");
    filters.toggle_publisher(8);
    filters.set_content_type(ContentType::NewsArticles);
    filters.set_start_date(NaiveDate::from_ymd_opt(2025, 1, 1));
    filters.set_end_date(NaiveDate::from_ymd_opt(2025, 6, 30));

    let request = build_request(&filters, "vaccines");
    let keys: Vec<&str> = request.params().iter().map(|(k, _)| *k).collect();

    assert_eq!(
        keys,
        ["query", "cat", "tp", "start_dt", "end_dt", "cls", "pub_ids"]
    );
    assert_eq!(request.get("cat"), Some("science,health"));
    assert_eq!(request.get("cls"), Some("A,B"));
    assert_eq!(request.get("pub_ids"), Some("8"));
}
