//! Portico Web Server
//!
//! Main web server implementation using Axum.

use crate::{create_app, AppState, WebConfig, WebError, WebResult};
use axum::serve;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Main Portico web server
pub struct PorticoServer {
    config: WebConfig,
    state: AppState,
}

impl PorticoServer {
    /// Create a new Portico server
    pub async fn new(config: WebConfig) -> WebResult<Self> {
        let state = AppState::new(config.clone()).await?;

        Ok(Self { config, state })
    }

    /// Start the web server
    pub async fn start(self) -> WebResult<()> {
        let address = self.config.address();

        info!("🚀 Starting Portico Web Server");
        info!("📍 Server address: http://{}", address);
        info!("🔧 Development mode: {}", self.config.dev_mode);

        // Create the application
        let app = create_app(self.state.clone());

        // Create TCP listener
        let listener = TcpListener::bind(&address)
            .await
            .map_err(WebError::Server)?;

        info!("✅ Server listening on http://{}", address);

        // Start the server
        if let Err(e) = serve(listener, app).await {
            error!("❌ Server error: {}", e);
            return Err(WebError::Server(e));
        }

        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &WebConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Builder for PorticoServer
pub struct PorticoServerBuilder {
    config: WebConfig,
}

impl PorticoServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: WebConfig::default(),
        }
    }

    /// Set the server host
    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the server port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Enable development mode
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.config.dev_mode = dev_mode;
        self
    }

    /// Set the session persistence directory
    pub fn session_dir<P: Into<PathBuf>>(mut self, session_dir: P) -> Self {
        self.config.session_dir = Some(session_dir.into());
        self
    }

    /// Set the credential validation delay in milliseconds
    pub fn validation_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.validation_delay_ms = Some(delay_ms);
        self
    }

    /// Build the server
    pub async fn build(self) -> WebResult<PorticoServer> {
        PorticoServer::new(self.config).await
    }
}

impl Default for PorticoServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
