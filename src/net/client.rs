//! HTTP plumbing shared by the REST services.
//!
//! ERROR HANDLING
//! ==============
//! Every request is built here, run through [`JwtInterceptor`] and executed
//! exactly once. Non-2xx responses become [`ApiError::Status`] with the body
//! text so callers can inspect the status themselves.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::interceptor::JwtInterceptor;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::state::session::SessionStore;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    interceptor: JwtInterceptor,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ClientConfig, store: SessionStore) -> Self {
        Self { http: reqwest::Client::new(), config, interceptor: JwtInterceptor::new(store) }
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.config.endpoint(path))
    }

    /// Send and decode a JSON response body.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(builder).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send and discard whatever the server answered on success.
    pub(crate) async fn fetch_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.execute(builder).await?;
        Ok(())
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = self.interceptor.intercept(builder.build()?)?;
        tracing::debug!(
            method = %request.method(),
            path = request.url().path(),
            authorized = request.headers().contains_key(AUTHORIZATION),
            "dispatching request"
        );

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(response)
    }
}
