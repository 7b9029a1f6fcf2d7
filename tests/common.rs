// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides an in-process Nutritionix stand-in server and resource builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutritionix_mcp_server`
//!
//! [`MockNutritionix`] binds an axum server to `127.0.0.1:0` that answers the
//! three Nutritionix endpoints with canned replies and records every request.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use nutritionix_mcp_server::config::{NutritionixCredentials, ServerConfig};
use nutritionix_mcp_server::mcp::resources::ServerResources;
use nutritionix_mcp_server::tools::ToolExecutionContext;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const TEST_APP_ID: &str = "test-app-id";
pub const TEST_APP_KEY: &str = "test-app-key";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Remote endpoints served by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Search,
    Nutrients,
    Exercise,
}

/// Canned reply for one endpoint
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: u16,
    pub body: String,
}

/// Request as observed by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HeaderMap,
    pub body: String,
}

#[derive(Default)]
struct MockState {
    replies: Mutex<HashMap<Endpoint, MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process Nutritionix stand-in
pub struct MockNutritionix {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockNutritionix {
    /// Start a server with empty-list replies on every endpoint
    pub async fn start() -> Self {
        init_test_logging();

        let state = Arc::new(MockState::default());
        let mock_state = state.clone();

        let app = Router::new()
            .route("/v2/search/instant", get(search_handler))
            .route("/v2/natural/nutrients", post(nutrients_handler))
            .route("/v2/natural/exercise", post(exercise_handler))
            .with_state(mock_state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let mock = Self {
            base_url: format!("http://{addr}/v2"),
            state,
        };
        mock.reply_json(Endpoint::Search, 200, &json!({"common": [], "branded": []}));
        mock.reply_json(Endpoint::Nutrients, 200, &json!({"foods": []}));
        mock.reply_json(Endpoint::Exercise, 200, &json!({"exercises": []}));
        mock
    }

    /// Answer `endpoint` with a JSON body
    pub fn reply_json(&self, endpoint: Endpoint, status: u16, body: &Value) {
        self.reply_raw(endpoint, status, &body.to_string());
    }

    /// Answer `endpoint` with a raw text body
    pub fn reply_raw(&self, endpoint: Endpoint, status: u16, body: &str) {
        self.state.replies.lock().unwrap().insert(
            endpoint,
            MockReply {
                status,
                body: body.to_owned(),
            },
        );
    }

    /// Every request received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Server configuration pointing at this mock with the test credentials
    pub fn config(&self) -> ServerConfig {
        self.config_with(TEST_APP_ID, TEST_APP_KEY)
    }

    /// Server configuration pointing at this mock with custom credentials
    pub fn config_with(&self, app_id: &str, app_key: &str) -> ServerConfig {
        let credentials = NutritionixCredentials::new(app_id, app_key).unwrap();
        ServerConfig::new(credentials).with_base_url(&self.base_url)
    }

    /// Shared resources with all built-in tools registered
    pub fn resources(&self) -> Arc<ServerResources> {
        Arc::new(ServerResources::new(self.config()))
    }

    /// Tool execution context backed by this mock
    pub fn context(&self) -> ToolExecutionContext {
        ToolExecutionContext::new(self.resources())
    }
}

fn record_and_reply(
    state: &MockState,
    endpoint: Endpoint,
    method: &Method,
    uri: &Uri,
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let authorized = headers.get("x-app-id").and_then(|v| v.to_str().ok()) == Some(TEST_APP_ID)
        && headers.get("x-app-key").and_then(|v| v.to_str().ok()) == Some(TEST_APP_KEY);

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_owned(),
        query,
        headers,
        body,
    });

    let reply = if authorized {
        state
            .replies
            .lock()
            .unwrap()
            .get(&endpoint)
            .cloned()
            .unwrap()
    } else {
        MockReply {
            status: 401,
            body: r#"{"message":"unauthorized"}"#.to_owned(),
        }
    };

    (
        StatusCode::from_u16(reply.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

async fn search_handler(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    record_and_reply(
        &state,
        Endpoint::Search,
        &method,
        &uri,
        query,
        headers,
        String::new(),
    )
}

async fn nutrients_handler(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    record_and_reply(
        &state,
        Endpoint::Nutrients,
        &method,
        &uri,
        HashMap::new(),
        headers,
        body,
    )
}

async fn exercise_handler(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    record_and_reply(
        &state,
        Endpoint::Exercise,
        &method,
        &uri,
        HashMap::new(),
        headers,
        body,
    )
}
