//! Authentication extractors and API errors using Axum best practices

use crate::AppState;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Json, Response},
};
use portico_auth::ValidationError;
use portico_core::Identity;
use serde_json::json;

/// Extractor for the signed-in identity
///
/// Rejects with 401 when the session is empty. Guarded area handlers can
/// rely on it because the area guard has already admitted the request.
pub struct CurrentUser(pub Identity);

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let session = app_state.session.read().await;
        match session.current() {
            Some(identity) => Ok(CurrentUser(identity.clone())),
            None => Err(AuthApiError::Unauthenticated),
        }
    }
}

/// Optional variant of [`CurrentUser`] that never rejects
pub struct OptionalUser(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let session = app_state.session.read().await;
        Ok(OptionalUser(session.current().cloned()))
    }
}

/// Errors returned by the authentication API
#[derive(Debug)]
pub enum AuthApiError {
    /// Login payload failed field validation
    Validation {
        email: Option<String>,
        password: Option<String>,
    },
    /// The credential check rejected the attempt
    Credentials(ValidationError),
    /// The endpoint requires a signed-in session
    Unauthenticated,
}

impl From<ValidationError> for AuthApiError {
    fn from(error: ValidationError) -> Self {
        AuthApiError::Credentials(error)
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        match self {
            AuthApiError::Validation { email, password } => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation_failed",
                    "fields": {
                        "email": email,
                        "password": password,
                    },
                })),
            )
                .into_response(),
            AuthApiError::Credentials(error) => {
                let code = match error {
                    ValidationError::AccountNotFound => "account_not_found",
                    ValidationError::InvalidPassword => "invalid_password",
                };
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": code,
                        "message": error.to_string(),
                    })),
                )
                    .into_response()
            }
            AuthApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "unauthenticated",
                    "message": "Not signed in",
                })),
            )
                .into_response(),
        }
    }
}
