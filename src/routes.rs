//! Route identifiers handed to the navigation layer.
//!
//! These are passed verbatim to [`crate::guards::Navigator::navigate`]; the
//! navigation layer decides how a literal maps onto a view.

/// Application root, used after logging out.
pub const ROOT: &str = "";
/// Absolute home route, used after deleting an account.
pub const HOME: &str = "/";
/// Login page, target of the authenticated-only guard.
pub const LOGIN: &str = "login";
/// Absolute login page, used after a successful registration.
pub const LOGIN_PAGE: &str = "/login";
/// Session list, the landing route for logged-in users.
pub const SESSIONS: &str = "sessions";
/// Absolute session list, used after login and by the admin gate.
pub const SESSIONS_PAGE: &str = "/sessions";
/// Prefix of the session edit route (`/sessions/update/{id}`).
pub const SESSION_UPDATE_PREFIX: &str = "/sessions/update/";
/// Session creation route.
pub const SESSION_CREATE: &str = "/sessions/create";

/// Edit route for one session.
#[must_use]
pub fn session_update(session_id: u64) -> String {
    format!("{SESSION_UPDATE_PREFIX}{session_id}")
}
