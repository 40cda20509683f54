//! Wire DTOs exchanged with the REST authority.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON (`camelCase`, with the legacy
//! `teacher_id` and `type` keys mapped explicitly) so serde round-trips stay
//! lossless. Timestamps are RFC 3339.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// =============================================================================
// AUTH
// =============================================================================

/// Payload returned by a successful login. Replaced wholesale on each login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInformation {
    /// Opaque bearer credential.
    pub token: String,
    /// Credential scheme label, e.g. `"Bearer"`.
    #[serde(rename = "type")]
    pub scheme: String,
    /// Numeric user identifier.
    pub id: u64,
    /// Login name (the account email).
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the user may create, edit, and delete sessions.
    pub admin: bool,
}

impl SessionInformation {
    /// Value of the `Authorization` header for this session.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("{} {}", self.scheme, self.token)
    }
}

impl fmt::Debug for SessionInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionInformation")
            .field("token", &"<redacted>")
            .field("scheme", &self.scheme)
            .field("id", &self.id)
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("admin", &self.admin)
            .finish()
    }
}

/// Body of `POST api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

// =============================================================================
// SESSIONS
// =============================================================================

/// A yoga session. `id` and the audit timestamps are absent until the server
/// has stored it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    #[serde(rename = "teacher_id")]
    pub teacher_id: u64,
    /// Ids of participating users.
    #[serde(default)]
    pub users: Vec<u64>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Session {
    /// Whether `user_id` is among the participants.
    #[must_use]
    pub fn has_participant(&self, user_id: u64) -> bool {
        self.users.contains(&user_id)
    }
}

// =============================================================================
// TEACHERS / USERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Account record returned by `GET api/user/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OffsetDateTime>,
}
