//! Tests for the quote API client

use super::*;
use crate::source::Submission;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> QuoteApiClient {
    QuoteApiClient::new(server.uri())
}

#[test]
fn test_new_trims_trailing_slash() {
    let client = QuoteApiClient::new("http://quotes.local/");
    assert_eq!(client.base_url(), "http://quotes.local");
}

#[tokio::test]
async fn test_random_quote_reads_sentence_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sentence": "知识就是力量，学习改变命运。",
            "author": "培根"
        })))
        .mount(&server)
        .await;

    let quote = client_for(&server).random_quote().await.unwrap();

    assert_eq!(quote, Quote::new("知识就是力量，学习改变命运。", "培根"));
}

#[tokio::test]
async fn test_random_quotes_puts_count_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 3,
            "sentences": [
                {"content": "a", "author": "x"},
                {"content": "b", "author": "y"},
                {"content": "c", "author": "z"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let quotes = client_for(&server).random_quotes(3).await.unwrap();

    let contents: Vec<&str> = quotes.iter().map(|q| q.content.as_str()).collect();
    assert_eq!(contents, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_fetch_batch_yields_content_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 2,
            "sentences": [
                {"content": "first", "author": "one"},
                {"content": "second", "author": "two"}
            ]
        })))
        .mount(&server)
        .await;

    let items = client_for(&server).fetch_batch(2).await.unwrap();

    assert_eq!(items, vec!["first".to_string(), "second".to_string()]);
}

#[tokio::test]
async fn test_fetch_batch_empty_list_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random/5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"count": 0, "sentences": []})),
        )
        .mount(&server)
        .await;

    let items = client_for(&server).fetch_batch(5).await.unwrap();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_search_sends_keyword_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("keyword", "生活"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sentences": [{"content": "生活就像一盒巧克力。", "author": "阿甘正传"}]
        })))
        .mount(&server)
        .await;

    let results = client_for(&server).search("生活").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].author, "阿甘正传");
}

#[tokio::test]
async fn test_stats_decodes_counters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_sentences": 42,
            "today_views": 7,
            "pending_sentences": 2,
            "today_api_calls": 19
        })))
        .mount(&server)
        .await;

    let stats = client_for(&server).stats().await.unwrap();

    assert_eq!(stats.total_sentences, 42);
    assert_eq!(stats.today_api_calls, 19);
}

#[tokio::test]
async fn test_error_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/random/4"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_batch(4).await.unwrap_err();

    assert_eq!(
        err,
        SourceError::Api {
            code: 503,
            message: "maintenance".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).stats().await.unwrap_err();

    assert!(matches!(err, SourceError::Parse { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_server_maps_to_network_error() {
    // Port 9 (discard) is essentially never listening on loopback
    let client = QuoteApiClient::new("http://127.0.0.1:9");

    let err = client.random_quote().await.unwrap_err();

    assert!(matches!(err, SourceError::Network { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_leaderboard_sends_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/leaderboard"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "leaderboard": [
                {"rank": 1, "author": "小明", "count": 5},
                {"rank": 2, "author": "小红", "count": 3}
            ],
            "stats": {"total_approved_submissions": 20, "total_authors": 2, "top_submissions": 5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let board = client_for(&server).leaderboard(10).await.unwrap();

    assert_eq!(board.entries.len(), 2);
    assert_eq!(board.entries[1].author, "小红");
    assert_eq!(board.stats.top_submissions, 5);
}

#[tokio::test]
async fn test_submit_posts_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("content=Keep+going"))
        .and(body_string_contains("author=Tester"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>提交成功</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let submission = Submission::new("Keep going", "Tester").unwrap();
    let result = client_for(&server).submit(&submission).await;

    assert_eq!(result, Ok(()));
}

#[tokio::test]
async fn test_submit_duplicate_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<ul class=\"errors\"><li>该语句已存在，请勿重复提交</li></ul>"),
        )
        .mount(&server)
        .await;

    let submission = Submission::new("已经有了", "").unwrap();
    let err = client_for(&server).submit(&submission).await.unwrap_err();

    assert_eq!(
        err,
        SourceError::Rejected {
            message: "this quote already exists".to_string()
        }
    );
}

#[tokio::test]
async fn test_submit_server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/submit"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let submission = Submission::new("x", "").unwrap();
    let err = client_for(&server).submit(&submission).await.unwrap_err();

    assert!(matches!(err, SourceError::Api { code: 500, .. }), "got {:?}", err);
}
