//! Account lookup and deletion under `api/user`.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use reqwest::Method;

use super::client::ApiClient;
use super::types::User;
use crate::error::ApiError;

fn user_endpoint(user_id: u64) -> String {
    format!("api/user/{user_id}")
}

#[derive(Clone, Debug)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn get_by_id(&self, user_id: u64) -> Result<User, ApiError> {
        self.client
            .fetch_json(self.client.request(Method::GET, &user_endpoint(user_id)))
            .await
    }

    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn delete(&self, user_id: u64) -> Result<(), ApiError> {
        self.client
            .fetch_unit(self.client.request(Method::DELETE, &user_endpoint(user_id)))
            .await
    }
}
