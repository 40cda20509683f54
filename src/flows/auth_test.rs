use super::*;
use crate::test_support::{FakeAuthority, RecordingNavigator, session_information};
use reqwest::{Method, StatusCode};

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest { email: email.to_owned(), password: password.to_owned() }
}

fn register_request(first_name: &str) -> RegisterRequest {
    RegisterRequest {
        email: "test@example.com".to_owned(),
        first_name: first_name.to_owned(),
        last_name: "Doe".to_owned(),
        password: "password123".to_owned(),
    }
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_opens_session_and_lands_on_sessions() {
    let authority = FakeAuthority::start().await;
    authority.respond_json(200, &session_information("mock-jwt-token", 1, false));
    let store = SessionStore::new();
    let auth = AuthService::new(authority.client(&store));
    let navigator = RecordingNavigator::default();
    let mut feed = store.subscribe();

    let info = login(&auth, &store, &navigator, &login_request("test@example.com", "password123"))
        .await
        .unwrap();

    assert_eq!(info.token, "mock-jwt-token");
    assert_eq!(store.session_information(), Some(info));
    assert_eq!(feed.drain(), vec![false, true]);
    assert_eq!(navigator.routes(), vec!["/sessions"]);
}

#[tokio::test]
async fn login_rejected_by_server_leaves_everything_untouched() {
    let authority = FakeAuthority::start().await;
    authority.respond_text(401, "Bad credentials");
    let store = SessionStore::new();
    let auth = AuthService::new(authority.client(&store));
    let navigator = RecordingNavigator::default();

    let error = login(&auth, &store, &navigator, &login_request("test@example.com", "wrongpassword"))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
    assert!(!store.is_logged());
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn login_server_error_is_surfaced() {
    let authority = FakeAuthority::start().await;
    authority.respond_text(500, "Internal Server Error");
    let store = SessionStore::new();
    let auth = AuthService::new(authority.client(&store));
    let navigator = RecordingNavigator::default();

    let error = login(&auth, &store, &navigator, &login_request("test@example.com", "password123"))
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(!store.is_logged());
}

#[tokio::test]
async fn invalid_login_form_sends_nothing() {
    let authority = FakeAuthority::start().await;
    let store = SessionStore::new();
    let auth = AuthService::new(authority.client(&store));
    let navigator = RecordingNavigator::default();

    let error = login(&auth, &store, &navigator, &login_request("invalid-email", "password123"))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Invalid { field: "email", .. }));
    assert!(authority.requests().is_empty());
    assert!(navigator.routes().is_empty());
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_sends_user_to_login_page() {
    let authority = FakeAuthority::start().await;
    let store = SessionStore::new();
    let auth = AuthService::new(authority.client(&store));
    let navigator = RecordingNavigator::default();

    register(&auth, &navigator, &register_request("John")).await.unwrap();

    let request = authority.only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/api/auth/register");
    assert_eq!(navigator.routes(), vec!["/login"]);
    assert!(!store.is_logged());
}

#[tokio::test]
async fn register_conflict_does_not_navigate() {
    let authority = FakeAuthority::start().await;
    authority.respond_text(400, "Email already taken");
    let auth = AuthService::new(authority.client(&SessionStore::new()));
    let navigator = RecordingNavigator::default();

    let error = register(&auth, &navigator, &register_request("John")).await.unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn invalid_register_form_sends_nothing() {
    let authority = FakeAuthority::start().await;
    let auth = AuthService::new(authority.client(&SessionStore::new()));
    let navigator = RecordingNavigator::default();

    let error = register(&auth, &navigator, &register_request("Jo")).await.unwrap_err();

    assert!(matches!(error, ApiError::Invalid { field: "firstName", .. }));
    assert!(authority.requests().is_empty());
}

// =============================================================================
// logout
// =============================================================================

#[test]
fn logout_closes_session_and_returns_to_root() {
    let store = SessionStore::new();
    store.log_in(session_information("t", 1, false));
    let navigator = RecordingNavigator::default();
    let mut feed = store.subscribe();

    logout(&store, &navigator);

    assert!(!store.is_logged());
    assert_eq!(feed.drain(), vec![true, false]);
    assert_eq!(navigator.routes(), vec![""]);
}

#[test]
fn logout_when_logged_out_still_navigates() {
    let store = SessionStore::new();
    let navigator = RecordingNavigator::default();

    logout(&store, &navigator);

    assert!(!store.is_logged());
    assert_eq!(navigator.routes(), vec![""]);
}
