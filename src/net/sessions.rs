//! Session CRUD and participation under `api/session`.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use reqwest::Method;

use super::client::ApiClient;
use super::types::Session;
use crate::error::ApiError;

const SESSIONS_PATH: &str = "api/session";

fn session_endpoint(session_id: u64) -> String {
    format!("{SESSIONS_PATH}/{session_id}")
}

fn participation_endpoint(session_id: u64, user_id: u64) -> String {
    format!("{SESSIONS_PATH}/{session_id}/participate/{user_id}")
}

#[derive(Clone, Debug)]
pub struct SessionApiService {
    client: ApiClient,
}

impl SessionApiService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn all(&self) -> Result<Vec<Session>, ApiError> {
        self.client.fetch_json(self.client.request(Method::GET, SESSIONS_PATH)).await
    }

    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn detail(&self, session_id: u64) -> Result<Session, ApiError> {
        self.client
            .fetch_json(self.client.request(Method::GET, &session_endpoint(session_id)))
            .await
    }

    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn delete(&self, session_id: u64) -> Result<(), ApiError> {
        self.client
            .fetch_unit(self.client.request(Method::DELETE, &session_endpoint(session_id)))
            .await
    }

    /// Create `session`; the server answers with the stored copy.
    ///
    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn create(&self, session: &Session) -> Result<Session, ApiError> {
        self.client
            .fetch_json(self.client.request(Method::POST, SESSIONS_PATH).json(session))
            .await
    }

    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn update(&self, session_id: u64, session: &Session) -> Result<Session, ApiError> {
        self.client
            .fetch_json(self.client.request(Method::PUT, &session_endpoint(session_id)).json(session))
            .await
    }

    /// Add `user_id` to the session's participants.
    ///
    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError> {
        self.client
            .fetch_unit(self.client.request(Method::POST, &participation_endpoint(session_id, user_id)))
            .await
    }

    /// Remove `user_id` from the session's participants.
    ///
    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn un_participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError> {
        self.client
            .fetch_unit(self.client.request(Method::DELETE, &participation_endpoint(session_id, user_id)))
            .await
    }
}
