//! Authentication handlers for login, logout and session introspection

use super::types::{LoginRequest, LogoutResponse, SessionResponse};
use crate::auth::{AuthApiError, CurrentUser};
use crate::AppState;
use axum::{extract::State, response::Json};
use portico_auth::SessionRecord;
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validate the login payload before touching the directory
///
/// Mirrors the login form rules: both fields present, plausible email
/// shape, password of at least six characters. Both field errors are
/// reported in one pass.
fn validate_login_payload(request: &LoginRequest) -> Result<(), AuthApiError> {
    let email = request.email.trim();
    let email_error = if email.is_empty() {
        Some("Email is required".to_string())
    } else if !EMAIL_REGEX.is_match(email) {
        Some("Please enter a valid email address".to_string())
    } else {
        None
    };

    let password_error = if request.password.is_empty() {
        Some("Password is required".to_string())
    } else if request.password.len() < 6 {
        Some("Password must be at least 6 characters".to_string())
    } else {
        None
    };

    if email_error.is_some() || password_error.is_some() {
        return Err(AuthApiError::Validation {
            email: email_error,
            password: password_error,
        });
    }

    Ok(())
}

/// Login endpoint
///
/// Validates the payload, checks the credentials against the account
/// directory and commits the resulting identity as the session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    summary = "Sign in",
    description = "Validate credentials and commit the browsing-context session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = SessionResponse),
        (status = 400, description = "Payload failed field validation"),
        (status = 401, description = "Unknown account or wrong password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AuthApiError> {
    validate_login_payload(&request)?;

    info!("Login attempt for {}", request.email.trim());

    // The session stays untouched until the credential check settles.
    let identity = state
        .validator
        .validate(&request.email, &request.password)
        .await?;

    let record = SessionRecord::from(&identity);
    let mut session = state.session.write().await;
    session.commit(identity);

    Ok(Json(SessionResponse { user: record }))
}

/// Logout endpoint
///
/// Clearing an already empty session is a no-op, so this always
/// succeeds.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    summary = "Sign out",
    responses(
        (status = 200, description = "Session cleared", body = LogoutResponse)
    )
)]
pub async fn logout(State(state): State<AppState>) -> Json<LogoutResponse> {
    let mut session = state.session.write().await;
    session.clear();

    Json(LogoutResponse {
        message: "Signed out successfully".to_string(),
    })
}

/// Current user endpoint
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    summary = "Current user",
    responses(
        (status = 200, description = "Signed-in user", body = SessionResponse),
        (status = 401, description = "No active session")
    )
)]
pub async fn current_user(CurrentUser(identity): CurrentUser) -> Json<SessionResponse> {
    Json(SessionResponse {
        user: SessionRecord::from(&identity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn fields(error: AuthApiError) -> (Option<String>, Option<String>) {
        match error {
            AuthApiError::Validation { email, password } => (email, password),
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_are_reported_together() {
        let error = validate_login_payload(&payload("", "")).unwrap_err();
        let (email, password) = fields(error);

        assert_eq!(email.as_deref(), Some("Email is required"));
        assert_eq!(password.as_deref(), Some("Password is required"));
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let error = validate_login_payload(&payload("not-an-email", "password123")).unwrap_err();
        let (email, password) = fields(error);

        assert_eq!(email.as_deref(), Some("Please enter a valid email address"));
        assert!(password.is_none());
    }

    #[test]
    fn test_short_password_is_rejected() {
        let error = validate_login_payload(&payload("user@test.com", "abc")).unwrap_err();
        let (email, password) = fields(error);

        assert!(email.is_none());
        assert_eq!(
            password.as_deref(),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_surrounding_whitespace_does_not_fail_the_email_check() {
        assert!(validate_login_payload(&payload("  user@test.com  ", "user123")).is_ok());
    }

    #[test]
    fn test_well_formed_payload_passes() {
        assert!(validate_login_payload(&payload("user@test.com", "user123")).is_ok());
    }
}
