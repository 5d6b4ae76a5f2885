//! Route definitions for the Portico web server

use crate::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};

/// API routes under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/auth/login", post(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        .route("/auth/me", get(handlers::current_user))
}

/// Admin area routes under `/admin`
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::admin_dashboard))
        .route("/users", get(handlers::list_users))
        .route("/logs/system", get(handlers::system_logs))
        .route("/logs/activity", get(handlers::activity_logs))
        .route("/logs/audit", get(handlers::audit_logs))
        .route("/applications", get(handlers::applications))
        .route(
            "/settings",
            get(handlers::admin_settings).put(handlers::update_admin_settings),
        )
}

/// User area routes under `/user`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::user_dashboard))
        .route("/db-manage", get(handlers::db_connection_form))
        .route("/db-manage/test", post(handlers::test_db_connection))
        .route("/process", get(handlers::process_history))
        .route("/settings", get(handlers::user_settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WebConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check_route() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = WebConfig {
            session_dir: Some(temp_dir.path().to_path_buf()),
            validation_delay_ms: Some(0),
            ..Default::default()
        };
        let state = AppState::new(config).await.unwrap();
        let app = api_routes().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
