//! Client configuration loaded from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `YOGA_API_URL` is unset or blank.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "YOGA_API_URL";

/// Where the REST authority lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Load from `YOGA_API_URL`, falling back to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(base_url_or_default(std::env::var(BASE_URL_ENV).ok()))
    }

    /// Join a relative API path such as `api/session/1` onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub(crate) fn base_url_or_default(raw: Option<String>) -> String {
    raw.map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
}
