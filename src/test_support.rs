//! Shared fixtures for unit tests: payload builders, recording doubles for the
//! navigation and toast seams, and an in-process fake REST authority.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use time::macros::datetime;

use crate::config::ClientConfig;
use crate::flows::Notifier;
use crate::guards::Navigator;
use crate::net::client::ApiClient;
use crate::net::types::{Session, SessionInformation, Teacher, User};
use crate::state::session::SessionStore;

// =============================================================================
// PAYLOADS
// =============================================================================

pub fn session_information(token: &str, id: u64, admin: bool) -> SessionInformation {
    SessionInformation {
        token: token.to_owned(),
        scheme: "Bearer".to_owned(),
        id,
        username: "test@example.com".to_owned(),
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        admin,
    }
}

pub fn logged_in_store(id: u64, admin: bool) -> SessionStore {
    let store = SessionStore::new();
    store.log_in(session_information("test-token", id, admin));
    store
}

pub fn session(id: u64, users: Vec<u64>) -> Session {
    Session {
        id: Some(id),
        name: "Yoga Session".to_owned(),
        description: "A relaxing yoga session".to_owned(),
        date: datetime!(2023-12-25 00:00 UTC),
        teacher_id: 1,
        users,
        created_at: Some(datetime!(2023-12-20 00:00 UTC)),
        updated_at: Some(datetime!(2023-12-20 00:00 UTC)),
    }
}

pub fn teacher(id: u64) -> Teacher {
    Teacher {
        id,
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        created_at: datetime!(2023-01-01 00:00 UTC),
        updated_at: datetime!(2023-01-01 00:00 UTC),
    }
}

pub fn user(id: u64) -> User {
    User {
        id,
        email: "john.doe@example.com".to_owned(),
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        admin: false,
        password: None,
        created_at: datetime!(2023-01-01 00:00 UTC),
        updated_at: None,
    }
}

// =============================================================================
// RECORDING DOUBLES
// =============================================================================

#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().expect("navigator mutex should lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().expect("navigator mutex should lock").push(route.to_owned());
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notifier mutex should lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().expect("notifier mutex should lock").push(message.to_owned());
    }
}

// =============================================================================
// FAKE AUTHORITY
// =============================================================================

/// One request as the fake authority saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }
}

#[derive(Clone, Default)]
struct Shared {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
}

/// Axum server on an ephemeral port that records every request and answers
/// with scripted responses in order (`200 null` once the script runs out).
pub struct FakeAuthority {
    base_url: String,
    shared: Shared,
    task: tokio::task::JoinHandle<()>,
}

impl FakeAuthority {
    pub async fn start() -> Self {
        let shared = Shared::default();
        let app = Router::new().fallback(record).with_state(shared.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("fake authority should bind");
        let addr = listener.local_addr().expect("fake authority should have an address");
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake authority should serve");
        });
        Self { base_url: format!("http://{addr}"), shared, task }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.base_url.clone())
    }

    pub fn client(&self, store: &SessionStore) -> ApiClient {
        ApiClient::new(self.config(), store.clone())
    }

    pub fn respond_json(&self, status: u16, body: &impl serde::Serialize) {
        let body = serde_json::to_string(body).expect("response should serialize");
        self.push(status, body);
    }

    pub fn respond_text(&self, status: u16, body: &str) {
        self.push(status, body.to_owned());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.requests.lock().expect("requests mutex should lock").clone()
    }

    /// The single request received so far; panics on zero or several.
    pub fn only_request(&self) -> RecordedRequest {
        let mut requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.remove(0)
    }

    fn push(&self, status: u16, body: String) {
        let status = StatusCode::from_u16(status).expect("status should be valid");
        self.shared
            .responses
            .lock()
            .expect("responses mutex should lock")
            .push_back((status, body));
    }
}

impl Drop for FakeAuthority {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn record(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    shared
        .requests
        .lock()
        .expect("requests mutex should lock")
        .push(RecordedRequest { method, path: uri.path().to_owned(), headers, body });
    let (status, body) = shared
        .responses
        .lock()
        .expect("responses mutex should lock")
        .pop_front()
        .unwrap_or((StatusCode::OK, "null".to_owned()));
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
