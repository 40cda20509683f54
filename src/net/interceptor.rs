//! Bearer-credential decoration for outgoing requests.
//!
//! The store is read at the moment a request passes through, so a login or
//! logout between two requests shows up on the next one with no extra wiring.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::error::ApiError;
use crate::state::session::SessionStore;

#[derive(Clone, Debug)]
pub struct JwtInterceptor {
    store: SessionStore,
}

impl JwtInterceptor {
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Return `request` unchanged when logged out, or with
    /// `Authorization: <scheme> <token>` added when logged in. Method, URL,
    /// body and the remaining headers are left as they were.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidHeader`] if the credential is not a valid
    /// header value.
    pub fn intercept(&self, mut request: Request) -> Result<Request, ApiError> {
        let Some(authorization) = self.store.authorization() else {
            return Ok(request);
        };
        let mut value = HeaderValue::from_str(&authorization)?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(request)
    }
}
