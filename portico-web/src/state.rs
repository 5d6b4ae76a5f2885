//! Application state management

use crate::{WebConfig, WebError, WebResult};
use portico_auth::{
    AccessGuard, AuthConfig, CredentialValidator, RouteTable, SessionFile, SessionStore,
    StaticDirectory,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Shared application state
///
/// One process serves one browsing context, so the session store is a
/// single shared value rather than a map keyed by client token.
#[derive(Clone)]
pub struct AppState {
    /// Web server configuration
    pub config: WebConfig,
    /// Credential validator over the account directory
    pub validator: Arc<CredentialValidator>,
    /// The browsing-context session
    pub session: Arc<RwLock<SessionStore>>,
    /// Role guard for the admin and user areas
    pub guard: Arc<AccessGuard>,
}

impl AppState {
    /// Initialize application state
    pub async fn new(config: WebConfig) -> WebResult<Self> {
        info!("Initializing application state...");

        let mut auth_config = AuthConfig::default();
        if let Some(dir) = &config.session_dir {
            auth_config.session_dir = dir.clone();
        }
        if let Some(delay_ms) = config.validation_delay_ms {
            auth_config.validation_delay_ms = delay_ms;
        }

        let directory = Arc::new(StaticDirectory::with_demo_accounts());
        let validator =
            CredentialValidator::new(directory).with_delay(auth_config.validation_delay());

        let storage = SessionFile::new(&auth_config.session_dir).map_err(|e| {
            WebError::Config(format!("Failed to initialize session storage: {}", e))
        })?;
        let mut session = SessionStore::new(storage);
        // Restore the previous session before any request can reach the guard.
        session.rehydrate();

        let guard = AccessGuard::new(RouteTable::with_defaults());

        info!("Application state initialized successfully");

        Ok(Self {
            config,
            validator: Arc::new(validator),
            session: Arc::new(RwLock::new(session)),
            guard: Arc::new(guard),
        })
    }
}
