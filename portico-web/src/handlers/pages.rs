//! Entry-point pages and the catch-all route

use super::types::{DemoAccount, ErrorResponse, LoginPageResponse};
use crate::auth::OptionalUser;
use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Redirect, Response},
};
use tracing::warn;

/// The console root forwards to the login screen
pub async fn root_redirect() -> Redirect {
    Redirect::temporary("/login")
}

/// Login page descriptor
///
/// An already signed-in visitor is forwarded to the home of their role
/// instead of seeing the login screen again.
#[utoipa::path(
    get,
    path = "/login",
    tag = "Pages",
    summary = "Login page descriptor",
    responses(
        (status = 200, description = "Login page content", body = LoginPageResponse),
        (status = 307, description = "Already signed in, forwarded to the role home")
    )
)]
pub async fn login_page(OptionalUser(user): OptionalUser) -> Response {
    if let Some(identity) = user {
        return Redirect::temporary(identity.role.home_path()).into_response();
    }

    Json(login_page_descriptor()).into_response()
}

fn login_page_descriptor() -> LoginPageResponse {
    LoginPageResponse {
        title: "EnterpriseSaaS".to_string(),
        tagline: "Secure enterprise management platform".to_string(),
        demo_accounts: vec![
            DemoAccount {
                email: "admin@test.com".to_string(),
                password: "admin123".to_string(),
                role: "admin".to_string(),
            },
            DemoAccount {
                email: "user@test.com".to_string(),
                password: "user123".to_string(),
                role: "user".to_string(),
            },
        ],
        password_min_length: 6,
        footer: "© 2026 EnterpriseSaaS. All rights reserved.".to_string(),
    }
}

/// Catch-all for routes no handler owns
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    warn!("Route not found: {}", uri.path());

    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "not_found".to_string(),
            message: "Oops! Page not found".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_lists_both_demo_accounts() {
        let page = login_page_descriptor();

        assert_eq!(page.title, "EnterpriseSaaS");
        assert_eq!(page.demo_accounts.len(), 2);
        assert_eq!(page.demo_accounts[0].email, "admin@test.com");
        assert_eq!(page.demo_accounts[1].email, "user@test.com");
        assert_eq!(page.password_min_length, 6);
    }
}
