//! Field checks applied before a form is sent.
//!
//! Lengths count characters, not bytes.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::error::ApiError;
use crate::net::types::{LoginRequest, RegisterRequest};

pub const PASSWORD_MIN: usize = 3;
pub const PASSWORD_MAX: usize = 40;
pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 20;
pub const DESCRIPTION_MAX: usize = 2000;

/// # Errors
///
/// Returns [`ApiError::Invalid`] naming the first offending field.
pub fn login(request: &LoginRequest) -> Result<(), ApiError> {
    email(&request.email)?;
    length("password", &request.password, PASSWORD_MIN, usize::MAX)
}

/// # Errors
///
/// Returns [`ApiError::Invalid`] naming the first offending field.
pub fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    email(&request.email)?;
    length("firstName", &request.first_name, NAME_MIN, NAME_MAX)?;
    length("lastName", &request.last_name, NAME_MIN, NAME_MAX)?;
    length("password", &request.password, PASSWORD_MIN, PASSWORD_MAX)
}

/// Session form fields: both required, description capped.
///
/// # Errors
///
/// Returns [`ApiError::Invalid`] naming the first offending field.
pub fn session_fields(name: &str, description: &str) -> Result<(), ApiError> {
    required("name", name)?;
    required("description", description)?;
    length("description", description, 1, DESCRIPTION_MAX)
}

fn email(value: &str) -> Result<(), ApiError> {
    required("email", value)?;
    let shaped = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'));
    if !shaped || value.chars().any(char::is_whitespace) {
        return Err(ApiError::Invalid { field: "email", reason: "must be an email address" });
    }
    Ok(())
}

fn required(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Invalid { field, reason: "is required" });
    }
    Ok(())
}

fn length(field: &'static str, value: &str, min: usize, max: usize) -> Result<(), ApiError> {
    required(field, value)?;
    let count = value.chars().count();
    if count < min {
        return Err(ApiError::Invalid { field, reason: "is too short" });
    }
    if count > max {
        return Err(ApiError::Invalid { field, reason: "is too long" });
    }
    Ok(())
}
