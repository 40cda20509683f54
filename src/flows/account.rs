//! The logged-in user's own account.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use crate::error::ApiError;
use crate::flows::Notifier;
use crate::guards::Navigator;
use crate::net::types::User;
use crate::net::users::UserService;
use crate::routes;
use crate::state::session::SessionStore;

pub const ACCOUNT_DELETED: &str = "Your account has been deleted !";

/// Fetches the profile of the user the store says is logged in.
///
/// # Errors
///
/// [`ApiError::MissingSession`] when logged out, otherwise the service error.
pub async fn current_user(users: &UserService, store: &SessionStore) -> Result<User, ApiError> {
    let user_id = store.user_id().ok_or(ApiError::MissingSession)?;
    users.get_by_id(user_id).await
}

/// Deletes the current account, then closes the session and returns home.
///
/// # Errors
///
/// [`ApiError::MissingSession`] when logged out, otherwise the service error.
/// On error the session stays open and nothing is shown.
pub async fn delete_account<N: Navigator, T: Notifier>(
    users: &UserService,
    store: &SessionStore,
    navigator: N,
    notifier: T,
) -> Result<(), ApiError> {
    let user_id = store.user_id().ok_or(ApiError::MissingSession)?;
    users.delete(user_id).await?;
    notifier.notify(ACCOUNT_DELETED);
    store.log_out();
    navigator.navigate(routes::HOME);
    Ok(())
}
