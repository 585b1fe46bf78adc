//! Tests for the blocking HTTP transport against a mock Adlib endpoint.

use podium_harvester::http::{HttpTransport, PageTransport};
use podium_harvester::HarvestError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE_BODY: &str = r#"<adlibXML><recordList>
  <record><priref>1</priref><Dating><dating.date.start>2020-06-01</dating.date.start></Dating></record>
</recordList></adlibXML>"#;

/// The blocking client must run off the async test runtime.
async fn fetch_blocking(
    base_url: String,
    filter: String,
    limit: u32,
    offset: u32,
) -> podium_harvester::Result<String> {
    tokio::task::spawn_blocking(move || {
        let transport = HttpTransport::new(base_url)?;
        transport.fetch_page(&filter, limit, offset)
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn test_fetch_page_sends_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wwwopac.ashx"))
        .and(query_param("database", "performTIN"))
        .and(query_param("search", "dating.date.start>'2020-01-01'"))
        .and(query_param("limit", "500"))
        .and(query_param("startfrom", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/wwwopac.ashx?database=performTIN", server.uri());
    let body = fetch_blocking(
        base_url,
        "dating.date.start>'2020-01-01'".to_string(),
        500,
        0,
    )
    .await
    .unwrap();

    assert!(body.contains("<priref>1</priref>"));
}

#[tokio::test]
async fn test_fetch_page_forwards_offset() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("startfrom", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = format!("{}/wwwopac.ashx", server.uri());
    fetch_blocking(base_url, "dating.date.start>'2020-01-01'".to_string(), 500, 500)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_server_error_is_fatal_with_offset_context() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1) // no retry
        .mount(&server)
        .await;

    let base_url = format!("{}/wwwopac.ashx", server.uri());
    let result = fetch_blocking(base_url, "x".to_string(), 500, 1500).await;

    match result {
        Err(HarvestError::Transport { offset, .. }) => assert_eq!(offset, 1500),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let base_url = format!("{}/wwwopac.ashx", server.uri());
    let result = fetch_blocking(base_url, "x".to_string(), 500, 0).await;
    assert!(matches!(result, Err(HarvestError::Transport { .. })));
}
