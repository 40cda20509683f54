//! Teacher lookups under `api/teacher`.

#[cfg(test)]
#[path = "teachers_test.rs"]
mod teachers_test;

use reqwest::Method;

use super::client::ApiClient;
use super::types::Teacher;
use crate::error::ApiError;

const TEACHERS_PATH: &str = "api/teacher";

fn teacher_endpoint(teacher_id: u64) -> String {
    format!("{TEACHERS_PATH}/{teacher_id}")
}

#[derive(Clone, Debug)]
pub struct TeacherService {
    client: ApiClient,
}

impl TeacherService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn all(&self) -> Result<Vec<Teacher>, ApiError> {
        self.client.fetch_json(self.client.request(Method::GET, TEACHERS_PATH)).await
    }

    /// # Errors
    ///
    /// Returns the transport or status failure unchanged.
    pub async fn detail(&self, teacher_id: u64) -> Result<Teacher, ApiError> {
        self.client
            .fetch_json(self.client.request(Method::GET, &teacher_endpoint(teacher_id)))
            .await
    }
}
