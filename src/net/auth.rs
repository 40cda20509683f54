//! Credential exchange with the authentication authority.
//!
//! SYSTEM CONTEXT
//! ==============
//! This gateway only reports what the authority answered. Opening the local
//! session with the returned payload is the caller's job (`flows::auth`), so
//! the gateway and the store can be exercised separately.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use reqwest::Method;

use super::client::ApiClient;
use super::types::{LoginRequest, RegisterRequest, SessionInformation};
use crate::error::ApiError;

const LOGIN_PATH: &str = "api/auth/login";
const REGISTER_PATH: &str = "api/auth/register";

#[derive(Clone, Debug)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST api/auth/login`.
    ///
    /// # Errors
    ///
    /// Bad credentials, server failures and transport failures are all
    /// returned unchanged; nothing is retried.
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionInformation, ApiError> {
        self.client
            .fetch_json(self.client.request(Method::POST, LOGIN_PATH).json(request))
            .await
    }

    /// `POST api/auth/register`. The acknowledgement body is ignored.
    ///
    /// # Errors
    ///
    /// Same policy as [`AuthService::login`].
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.client
            .fetch_unit(self.client.request(Method::POST, REGISTER_PATH).json(request))
            .await
    }
}
