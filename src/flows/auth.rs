//! Login, registration and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ApiError;
use crate::flows::validate;
use crate::guards::Navigator;
use crate::net::auth::AuthService;
use crate::net::types::{LoginRequest, RegisterRequest, SessionInformation};
use crate::routes;
use crate::state::session::SessionStore;

/// Validates the credentials, exchanges them for a session, records it in the
/// store and lands on the session list.
///
/// # Errors
///
/// Validation and gateway failures are returned before the store is touched
/// or any navigation happens.
pub async fn login<N: Navigator>(
    auth: &AuthService,
    store: &SessionStore,
    navigator: N,
    request: &LoginRequest,
) -> Result<SessionInformation, ApiError> {
    validate::login(request)?;
    let information = auth.login(request).await?;
    store.log_in(information.clone());
    navigator.navigate(routes::SESSIONS_PAGE);
    Ok(information)
}

/// Creates the account and sends the user to the login page. The store is not
/// touched: registering does not open a session.
///
/// # Errors
///
/// Validation and gateway failures, with no navigation.
pub async fn register<N: Navigator>(
    auth: &AuthService,
    navigator: N,
    request: &RegisterRequest,
) -> Result<(), ApiError> {
    validate::register(request)?;
    auth.register(request).await?;
    navigator.navigate(routes::LOGIN_PAGE);
    Ok(())
}

pub fn logout<N: Navigator>(store: &SessionStore, navigator: N) {
    store.log_out();
    navigator.navigate(routes::ROOT);
}
