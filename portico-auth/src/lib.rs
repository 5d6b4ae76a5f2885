//! Portico Auth - Authentication core
//!
//! This module provides the authentication building blocks for portico:
//!
//! - Credential validation against a pluggable account directory
//! - Session state that survives restarts of the same browsing context
//! - Role-based access decisions for the admin and user areas
//!
//! ## Architecture
//!
//! This module follows a clear separation between:
//! - **Directory** (directory): where account records live
//! - **Validation** (validator): turning raw credentials into an identity
//! - **Session** (session): who, if anyone, is currently signed in
//! - **Access control** (guard, routes): which area a session may enter

pub mod directory;
pub mod guard;
pub mod routes;
pub mod session;
pub mod validator;

pub use directory::{CredentialRecord, Directory, StaticDirectory};
pub use guard::{AccessDecision, AccessGuard, GuardError};
pub use routes::RouteTable;
pub use session::{SessionFile, SessionRecord, SessionStore, AUTH_SESSION_KEY};
pub use validator::{CredentialValidator, ValidationError, DEFAULT_VALIDATION_DELAY};

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Directory where the session record is persisted
    pub session_dir: std::path::PathBuf,
    /// Simulated validation round-trip delay in milliseconds
    pub validation_delay_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        let session_dir = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("portico")
            .join("session");

        Self {
            session_dir,
            validation_delay_ms: DEFAULT_VALIDATION_DELAY.as_millis() as u64,
        }
    }
}

impl AuthConfig {
    /// Create local configuration keeping session state under the working directory
    pub fn local() -> Self {
        Self {
            session_dir: std::path::PathBuf::from(".portico/session"),
            ..Self::default()
        }
    }

    /// The validation delay as a [`std::time::Duration`]
    pub fn validation_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.validation_delay_ms)
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::{
        AccessDecision, AccessGuard, AuthConfig, CredentialValidator, Directory, RouteTable,
        SessionFile, SessionStore, StaticDirectory, ValidationError,
    };
}
