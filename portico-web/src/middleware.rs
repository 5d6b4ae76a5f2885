//! Area guard middleware

use crate::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use portico_auth::AccessDecision;
use tracing::{debug, error};

/// Role guard over the admin and user areas
///
/// Looks the request path up in the route table and checks the current
/// session against the required role. Paths outside every guarded area
/// pass through untouched. The decision is computed fresh per request,
/// so a session cleared mid-navigation redirects on the very next one.
pub async fn area_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let path = request.uri().path().to_string();

    // The lock must be released before the request proceeds; the login
    // handler takes the write side.
    let decision = {
        let session = state.session.read().await;
        state.guard.check_path(&session, &path)
    };

    match decision {
        Ok(AccessDecision::Allow) => Ok(next.run(request).await),
        Ok(AccessDecision::RedirectToLogin) => {
            debug!("Guard redirect to login for {}", path);
            Ok(Redirect::temporary("/login").into_response())
        }
        Ok(AccessDecision::RedirectToHome(home)) => {
            debug!("Guard redirect to {} for {}", home, path);
            Ok(Redirect::temporary(home).into_response())
        }
        Err(e) => {
            error!("Access guard failed for {}: {}", path, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
