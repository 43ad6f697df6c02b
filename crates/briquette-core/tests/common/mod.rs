use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    Router,
};
use briquette_core::GeminiClient;
use tokio::net::TcpListener;

/// A request captured by the mock narrative service.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    reply: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Handle to a running mock service.
pub struct MockService {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// Client pointed at this service with a test credential
    pub fn client(&self) -> GeminiClient {
        GeminiClient::builder()
            .with_endpoint(self.url.clone())
            .with_api_key(Some("test-key"))
            .build()
            .expect("Failed to build client")
    }
}

async fn record(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let api_key = headers
        .get("x-goog-api-key")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .expect("requests lock")
        .push(RecordedRequest {
            path: uri.path().to_string(),
            api_key,
            body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
        });
    (state.status, state.reply.clone())
}

/// Spawns a mock service answering every request with `status` and `reply`
pub async fn spawn_mock_service(status: StatusCode, reply: impl Into<String>) -> MockService {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock service");
    let addr = listener.local_addr().expect("Failed to read local address");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        status,
        reply: reply.into(),
        requests: requests.clone(),
    };
    let app = Router::new().fallback(record).with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    MockService {
        url: format!("http://{addr}"),
        requests,
    }
}

/// A successful `generateContent` body with the given text split in two parts
pub fn candidate_reply(first: &str, second: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": first}, {"text": second}]
            },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}
