//! In-process HTTP server for exercising the real fetch path in tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::IntoResponse;

/// One request as seen by the server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

struct ServerState {
    status: StatusCode,
    body: String,
    hits: AtomicUsize,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Handle to a running server that answers every request with one canned
/// response.
pub struct TestServer {
    pub base_url: String,
    state: Arc<ServerState>,
}

impl TestServer {
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("recorder mutex should lock").clone()
    }
}

/// Bind to an ephemeral local port and serve `status` + `body` for any path.
pub async fn spawn_server(status: StatusCode, body: &str) -> TestServer {
    let state = Arc::new(ServerState {
        status,
        body: body.to_owned(),
        hits: AtomicUsize::new(0),
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new().fallback(record).with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });
    TestServer { base_url: format!("http://{addr}"), state }
}

async fn record(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state
        .requests
        .lock()
        .expect("recorder mutex should lock")
        .push(RecordedRequest { method, path: uri.path().to_owned(), headers, body });
    (state.status, [(header::CONTENT_TYPE, "application/json")], state.body.clone())
}
