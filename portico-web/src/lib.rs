//! Portico Web Server
//!
//! Web interface for the Portico console. Serves the login API and the
//! role-gated admin and user areas behind the access guard.

pub mod auth;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use server::{PorticoServer, PorticoServerBuilder};
pub use state::AppState;

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use utoipa_swagger_ui::SwaggerUi;

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_credentials(true)
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    // Create the main router
    let router = Router::new()
        // Entry points
        .route("/", get(handlers::root_redirect))
        .route("/login", get(handlers::login_page))
        // API routes
        .nest("/api", routes::api_routes())
        // Role-guarded areas
        .nest("/admin", routes::admin_routes())
        .nest("/user", routes::user_routes())
        .fallback(handlers::not_found);

    #[cfg(feature = "openapi")]
    let router = router.merge(
        SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
    );

    router
        // The guard runs before route resolution, so unknown paths under a
        // guarded prefix still redirect instead of leaking a 404.
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::area_guard,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(1024 * 1024)) // 1MB max body size
        .with_state(state)
}

/// Configuration for the web server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable development mode
    pub dev_mode: bool,
    /// Directory holding the persisted session record
    pub session_dir: Option<PathBuf>,
    /// Simulated credential-check delay in milliseconds
    pub validation_delay_ms: Option<u64>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            dev_mode: false,
            session_dir: None,
            validation_delay_ms: None,
        }
    }
}

impl WebConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("PORTICO_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORTICO_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            dev_mode: std::env::var("PORTICO_DEV_MODE")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            session_dir: std::env::var("PORTICO_SESSION_DIR").ok().map(PathBuf::from),
            validation_delay_ms: std::env::var("PORTICO_VALIDATION_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> WebResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&content).map_err(|e| {
            WebError::Config(format!(
                "Invalid configuration file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(config)
    }

    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Error types for the web server
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for web operations
pub type WebResult<T> = Result<T, WebError>;
