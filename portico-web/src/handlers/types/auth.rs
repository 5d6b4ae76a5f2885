//! Authentication request and response types

use portico_auth::SessionRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login request payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin@test.com")]
    pub email: String,
    #[schema(example = "admin123")]
    pub password: String,
}

/// Response carrying the signed-in user
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub user: SessionRecord,
}

/// Logout confirmation
#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutResponse {
    #[schema(example = "Signed out successfully")]
    pub message: String,
}

/// Demo account hint shown on the login page
#[derive(Debug, Serialize, ToSchema)]
pub struct DemoAccount {
    #[schema(example = "admin@test.com")]
    pub email: String,
    #[schema(example = "admin123")]
    pub password: String,
    #[schema(example = "admin")]
    pub role: String,
}

/// Login page descriptor served to the console shell
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginPageResponse {
    #[schema(example = "EnterpriseSaaS")]
    pub title: String,
    #[schema(example = "Secure enterprise management platform")]
    pub tagline: String,
    pub demo_accounts: Vec<DemoAccount>,
    #[schema(example = 6)]
    pub password_min_length: usize,
    #[schema(example = "© 2026 EnterpriseSaaS. All rights reserved.")]
    pub footer: String,
}
