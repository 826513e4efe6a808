//! Tests for search_events

use super::*;
use crate::test_utils::test_helpers::{
    app_with_channels, drain_requests, key, key_with_mods, test_app,
};

fn type_keyword(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_search_key(app, key(KeyCode::Char(c)));
    }
}

#[test]
fn test_keys_ignored_when_closed() {
    let mut app = test_app();
    assert!(!handle_search_key(&mut app, key(KeyCode::Char('x'))));
}

#[test]
fn test_enter_sends_trimmed_keyword() {
    let (mut app, mut requests, _responses) = app_with_channels();
    open_search(&mut app);
    type_keyword(&mut app, " 梦想 ");

    assert!(handle_search_key(&mut app, key(KeyCode::Enter)));

    assert_eq!(
        drain_requests(&mut requests),
        vec![WorkerRequest::Search("梦想".to_string())]
    );
    assert!(app.search.is_pending());
}

#[test]
fn test_empty_keyword_shows_notice_without_request() {
    let (mut app, mut requests, _responses) = app_with_channels();
    open_search(&mut app);
    type_keyword(&mut app, "   ");

    handle_search_key(&mut app, key(KeyCode::Enter));

    assert!(drain_requests(&mut requests).is_empty());
    assert_eq!(
        app.notification.current_message(),
        Some("Enter a search keyword")
    );
}

#[test]
fn test_enter_on_results_sets_current_quote() {
    let mut app = test_app();
    open_search(&mut app);
    type_keyword(&mut app, "life");
    handle_search_results(
        &mut app,
        "life".to_string(),
        Ok(vec![
            Quote::new("first", "a"),
            Quote::new("second", "b"),
        ]),
    );

    handle_search_key(&mut app, key(KeyCode::Down));
    handle_search_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.quote.current(), Some(&Quote::new("second", "b")));
    assert!(!app.search.is_visible());
}

#[test]
fn test_no_results_notice() {
    let mut app = test_app();
    open_search(&mut app);
    type_keyword(&mut app, "zzz");

    handle_search_results(&mut app, "zzz".to_string(), Ok(Vec::new()));

    assert_eq!(app.notification.current_message(), Some("No matching quotes"));
    assert!(app.search.results().is_empty());
}

#[test]
fn test_late_response_for_replaced_keyword_is_ignored() {
    let (mut app, _requests, _responses) = app_with_channels();
    open_search(&mut app);
    type_keyword(&mut app, "春");
    handle_search_key(&mut app, key(KeyCode::Enter));
    type_keyword(&mut app, "天");
    handle_search_key(&mut app, key(KeyCode::Enter));

    handle_search_results(&mut app, "春".to_string(), Ok(Vec::new()));

    assert!(app.search.results().is_empty());
    assert!(app.search.is_pending());
    assert!(app.notification.current().is_none());

    handle_search_results(
        &mut app,
        "春天".to_string(),
        Ok(vec![Quote::new("春天来了", "a")]),
    );

    assert_eq!(app.search.results().len(), 1);
    assert!(!app.search.is_pending());
}

#[test]
fn test_search_error_is_reported() {
    let mut app = test_app();
    open_search(&mut app);
    app.search.mark_pending("x");

    handle_search_results(
        &mut app,
        "x".to_string(),
        Err(SourceError::Network {
            message: "refused".to_string(),
        }),
    );

    assert!(!app.search.is_pending());
    assert!(
        app.notification
            .current_message()
            .unwrap()
            .starts_with("Search failed")
    );
}

#[test]
fn test_esc_closes_search() {
    let mut app = test_app();
    open_search(&mut app);

    assert!(handle_search_key(&mut app, key(KeyCode::Esc)));
    assert!(!app.search.is_visible());
}

#[test]
fn test_ctrl_c_is_not_consumed() {
    let mut app = test_app();
    open_search(&mut app);

    assert!(!handle_search_key(
        &mut app,
        key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL)
    ));
}
