use super::*;
use crate::config::ApiTimeouts;
use crate::test_support::spawn_server;
use axum::http::StatusCode;
use serde_json::{Value, json};

fn http() -> HttpFetcher {
    HttpFetcher::new(ApiTimeouts { request_secs: 5, connect_secs: 5 }).unwrap()
}

// ===== request options =====

#[test]
fn options_builder_collects_headers_and_body() {
    let opts = RequestOptions::post()
        .with_header("Accept", "application/json")
        .with_json_body(&json!({ "a": 1 }))
        .unwrap();
    assert_eq!(opts.method, Method::POST);
    assert_eq!(opts.header("accept"), Some("application/json"));
    assert_eq!(opts.header("content-type"), None);
    assert_eq!(opts.body.as_deref(), Some(r#"{"a":1}"#));
}

#[test]
fn get_options_have_no_body() {
    let opts = RequestOptions::get();
    assert_eq!(opts.method, Method::GET);
    assert!(opts.headers.is_empty());
    assert!(opts.body.is_none());
}

// ===== decode =====

struct StaticFetch(Result<&'static str, u16>);

#[async_trait::async_trait]
impl Fetch for StaticFetch {
    async fn fetch(&self, _url: &str, _options: RequestOptions) -> Result<String, FetchError> {
        match self.0 {
            Ok(body) => Ok(body.to_owned()),
            Err(status) => Err(FetchError::Status { status, body: String::new() }),
        }
    }
}

#[tokio::test]
async fn fetcher_decodes_json_body() {
    let value: Value = fetcher(&StaticFetch(Ok(r#"{"ok":true}"#)), "http://x", RequestOptions::get())
        .await
        .unwrap();
    assert_eq!(value, json!({ "ok": true }));
}

#[tokio::test]
async fn fetcher_reports_malformed_json_as_parse_error() {
    let err = fetcher::<Value, _>(&StaticFetch(Ok("<html>")), "http://x", RequestOptions::get())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn fetcher_passes_transport_errors_through() {
    let err = fetcher::<Value, _>(&StaticFetch(Err(503)), "http://x", RequestOptions::get())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 503, .. }));
}

#[tokio::test]
async fn fetcher_accepts_trait_objects() {
    let fetch: Box<dyn Fetch> = Box::new(StaticFetch(Ok("[1,2]")));
    let value: Vec<u8> = fetcher(fetch.as_ref(), "http://x", RequestOptions::get()).await.unwrap();
    assert_eq!(value, vec![1, 2]);
}

// ===== http =====

#[tokio::test]
async fn http_fetch_sends_method_headers_and_body() {
    let server = spawn_server(StatusCode::OK, r#"{"ok":true}"#).await;
    let opts = RequestOptions::post()
        .with_header("Content-Type", "application/json")
        .with_header("X-Trace", "abc")
        .with_json_body(&json!({ "k": "v" }))
        .unwrap();

    let body = http().fetch(&format!("{}/things", server.base_url), opts).await.unwrap();
    assert_eq!(body, r#"{"ok":true}"#);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/things");
    assert_eq!(req.headers["content-type"], "application/json");
    assert_eq!(req.headers["x-trace"], "abc");
    assert_eq!(req.body, r#"{"k":"v"}"#);
}

#[tokio::test]
async fn http_fetch_maps_non_success_status() {
    let server = spawn_server(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#).await;
    let err = http()
        .fetch(&format!("{}/x", server.base_url), RequestOptions::get())
        .await
        .unwrap_err();
    match err {
        FetchError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, r#"{"error":"boom"}"#);
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn http_fetch_reports_connection_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = http()
        .fetch(&format!("http://{addr}/x"), RequestOptions::get())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Request(_)));
}

#[test]
fn from_config_builds_client() {
    assert!(HttpFetcher::from_config(&ApiConfig::default()).is_ok());
}
