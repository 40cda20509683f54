use super::*;

#[test]
fn status_error_exposes_status() {
    let error = ApiError::Status { status: StatusCode::UNAUTHORIZED, body: "Unauthorized".to_owned() };
    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
}

#[test]
fn status_error_display_includes_body() {
    let error = ApiError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "Internal Server Error".to_owned(),
    };
    assert_eq!(error.to_string(), "server responded 500 Internal Server Error: Internal Server Error");
}

#[test]
fn invalid_error_has_no_status() {
    let error = ApiError::Invalid { field: "email", reason: "is required" };
    assert_eq!(error.status(), None);
    assert_eq!(error.to_string(), "invalid email: is required");
}

#[test]
fn missing_session_has_no_status() {
    assert_eq!(ApiError::MissingSession.status(), None);
    assert_eq!(ApiError::MissingSession.to_string(), "no active session");
}
