//! In-process stand-in for the Gemini `generateContent` endpoint, used by tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

/// What the stub server has seen so far.
#[derive(Clone, Default)]
pub struct Recorded {
    hits: Arc<AtomicUsize>,
    api_key: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<Value>>>,
}

impl Recorded {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn api_key(&self) -> Option<String> {
        self.api_key.lock().unwrap().clone()
    }

    pub fn body(&self) -> Option<Value> {
        self.body.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct StubState {
    recorded: Recorded,
    replies: Arc<Vec<(StatusCode, Value)>>,
}

/// A successful `generateContent` body carrying `text` in one part.
pub fn text_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 40, "candidatesTokenCount": 12}
    })
}

/// A Gemini-shaped error body.
pub fn error_reply(code: u16, message: &str) -> Value {
    json!({"error": {"code": code, "message": message, "status": "ERROR"}})
}

/// Starts the stub on an ephemeral port and returns its base URL.
/// Replies are served in order; the last one repeats.
pub async fn spawn(replies: Vec<(StatusCode, Value)>) -> (String, Recorded) {
    assert!(!replies.is_empty(), "stub needs at least one reply");
    let recorded = Recorded::default();
    let state = StubState {
        recorded: recorded.clone(),
        replies: Arc::new(replies),
    };

    let app = Router::new()
        .route("/v1beta/models/:model_action", post(generate_content))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), recorded)
}

async fn generate_content(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let hit = state.recorded.hits.fetch_add(1, Ordering::SeqCst);
    *state.recorded.api_key.lock().unwrap() = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *state.recorded.body.lock().unwrap() = Some(body);

    let (status, reply) = &state.replies[hit.min(state.replies.len() - 1)];
    (*status, Json(reply.clone()))
}
