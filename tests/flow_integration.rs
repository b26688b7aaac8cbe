//! Integration tests for the scrape/analyze search flow.

use sentiscope as crate_root;

use crate_root::sources::{analysis_from_value, analyze_call, scrape_call};
use crate_root::state::{
    Platform, SearchFlow, SearchPhase, SearchRequest, Timeframe, failure_message,
};

fn analysis_body() -> serde_json::Value {
    serde_json::json!({
        "keywords": [{"word": "rust", "count": 7}, {"word": "www", "count": 5}],
        "hashtags": [{"tag": "#rustlang", "count": 4}],
        "sentiment": {"score": 0.66, "sentiment": "positive"}
    })
}

#[test]
/// What: Drive a full search with built calls and a simulated backend response.
///
/// Inputs:
/// - Reddit search for "rust" over 30 days; analyze body echoes fake scraped posts.
///
/// Output:
/// - Calls target the expected endpoints and the flow ends prepared.
fn full_search_round() {
    let request = SearchRequest::new("rust", Platform::Reddit, Timeframe::Month)
        .expect("keyword present");
    let mut flow = SearchFlow::new();
    let id = flow.begin(&request);

    let scrape = scrape_call("http://localhost:8000", "v1", &request).expect("scrape call");
    assert_eq!(scrape.url, "http://localhost:8000/api/v1/scrape");
    assert_eq!(scrape.body["keyword"], "rust");

    let scraped_posts = serde_json::json!([{"id": 1, "text": "rust is great"}]);
    assert!(flow.scrape_done(id));
    let analyze = analyze_call("http://localhost:8000", "v1", scraped_posts.clone())
        .expect("analyze call");
    assert_eq!(analyze.body["posts"], scraped_posts);

    let result = analysis_from_value(analysis_body()).expect("analysis parses");
    assert!(flow.analyze_done(id, &result));
    let prepared = flow.prepared().expect("prepared");
    assert_eq!(prepared.keywords.len(), 1);
    assert_eq!(prepared.hashtags[0].normalized_count, 100);
    assert_eq!(prepared.score_percent, 66);
}

#[test]
/// What: Two overlapping searches; the older finishes last and is discarded.
///
/// Inputs:
/// - Searches A then B; B completes, then A's late completions arrive.
///
/// Output:
/// - B's result stays; A's completions are rejected.
fn overlapping_searches_keep_newest() {
    let a = SearchRequest::new("old", Platform::News, Timeframe::Day).expect("keyword");
    let b = SearchRequest::new("new", Platform::Twitter, Timeframe::Week).expect("keyword");
    let mut flow = SearchFlow::new();
    let id_a = flow.begin(&a);
    let id_b = flow.begin(&b);

    let result = analysis_from_value(analysis_body()).expect("analysis parses");
    assert!(flow.scrape_done(id_b));
    assert!(flow.analyze_done(id_b, &result));

    assert!(!flow.scrape_done(id_a));
    assert!(!flow.analyze_done(id_a, &result));
    assert!(!flow.fail(id_a, "late failure"));
    assert!(matches!(flow.phase(), SearchPhase::Prepared { id, .. } if *id == id_b));
}

#[test]
fn backend_error_moves_flow_to_failed() {
    let req = SearchRequest::new("outage", Platform::Twitter, Timeframe::Day).expect("keyword");
    let mut flow = SearchFlow::new();
    let id = flow.begin(&req);
    let body = serde_json::json!({"message": "Scraper quota exceeded"});
    assert!(flow.fail(id, failure_message(Some(&body), Some("HTTP 503"))));
    match flow.phase() {
        SearchPhase::Failed { message, .. } => assert_eq!(message, "Scraper quota exceeded"),
        other => panic!("expected failed phase, got {other:?}"),
    }
    assert_eq!(flow.status_text(), None);
}
