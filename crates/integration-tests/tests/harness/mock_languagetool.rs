//! Mock LanguageTool server for integration tests
//!
//! Serves `POST /v2/check` with canned matches, or with a failure mode

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json, Router, routing};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// How the mock answers every check request
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Return these matches
    Matches(Vec<serde_json::Value>),
    /// Return this status with an error body
    Fail(u16),
    /// Return 200 with a body that is not a check response
    Garbage,
    /// Wait before returning an empty match list
    Slow(Duration),
}

/// A check request as received by the mock
#[derive(Debug, Clone, Deserialize)]
pub struct CheckForm {
    pub text: String,
    pub language: String,
}

struct MockState {
    behavior: Behavior,
    requests: Mutex<Vec<CheckForm>>,
}

/// Mock LanguageTool backend
pub struct MockLanguageTool {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockLanguageTool {
    /// Start a mock that reports the given matches
    pub async fn start_with_matches(matches: Vec<serde_json::Value>) -> anyhow::Result<Self> {
        Self::start(Behavior::Matches(matches)).await
    }

    /// Start the mock server, returning immediately
    pub async fn start(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            behavior,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v2/check", routing::post(handle_check))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the grammar service
    pub fn base_url(&self) -> String {
        format!("http://{}/v2", self.addr)
    }

    /// Check requests received so far
    pub fn requests(&self) -> Vec<CheckForm> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockLanguageTool {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Build a match in the LanguageTool response format
pub fn lt_match(category: &str, message: &str, replacements: &[&str], context: &str) -> serde_json::Value {
    serde_json::json!({
        "message": message,
        "shortMessage": "",
        "replacements": replacements
            .iter()
            .map(|value| serde_json::json!({ "value": value }))
            .collect::<Vec<_>>(),
        "offset": 0,
        "length": context.len(),
        "context": { "text": context, "offset": 0, "length": context.len() },
        "sentence": context,
        "type": { "typeName": "Other" },
        "rule": {
            "id": format!("{category}_RULE"),
            "description": message,
            "issueType": "grammar",
            "category": { "id": category, "name": category }
        },
        "ignoreForIncompleteSentence": false,
        "contextForSureMatch": 0
    })
}

async fn handle_check(State(state): State<Arc<MockState>>, Form(form): Form<CheckForm>) -> Response {
    state.requests.lock().unwrap().push(form);

    match &state.behavior {
        Behavior::Matches(matches) => Json(check_response(matches.clone())).into_response(),
        Behavior::Fail(status) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            "mock server intentional failure",
        )
            .into_response(),
        Behavior::Garbage => (StatusCode::OK, "<html>not json</html>").into_response(),
        Behavior::Slow(delay) => {
            tokio::time::sleep(*delay).await;
            Json(check_response(Vec::new())).into_response()
        }
    }
}

fn check_response(matches: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "software": { "name": "LanguageTool", "version": "6.5" },
        "language": { "name": "English", "code": "en" },
        "matches": matches
    })
}
