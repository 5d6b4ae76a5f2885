//! Credential Validation
//!
//! Turns a raw (email, secret) attempt into a pass/fail verdict with a
//! specific failure reason.

use crate::directory::{normalize_email, Directory};
use portico_core::Identity;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Simulated round-trip delay applied to every validation call
pub const DEFAULT_VALIDATION_DELAY: Duration = Duration::from_millis(1500);

/// Credential validation failure
///
/// The two rejection reasons are deliberately distinct: callers surface a
/// different user-facing message for each, so they must never be collapsed
/// into a single "invalid credentials" case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No directory record exists for the submitted email
    #[error("Account not found. Please check your email.")]
    AccountNotFound,
    /// The record exists but the secret does not match
    #[error("Invalid password. Please try again.")]
    InvalidPassword,
}

/// Validates credential pairs against an account directory
///
/// Every call is independent: no retries, no attempt counters, no lockout.
pub struct CredentialValidator {
    directory: Arc<dyn Directory>,
    delay: Duration,
}

impl CredentialValidator {
    /// Create a validator with the default simulated delay
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self {
            directory,
            delay: DEFAULT_VALIDATION_DELAY,
        }
    }

    /// Override the simulated round-trip delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Validate a credential pair
    ///
    /// The email is normalized before lookup. On success the directory's
    /// identity for that email is returned.
    pub async fn validate(&self, email: &str, secret: &str) -> Result<Identity, ValidationError> {
        self.simulate_round_trip().await;

        let record = match self.directory.lookup(email).await {
            Some(record) => record,
            None => {
                warn!(
                    email = %normalize_email(email),
                    "Login rejected: account not found"
                );
                return Err(ValidationError::AccountNotFound);
            }
        };

        if record.secret != secret {
            warn!(
                email = %record.identity.email,
                "Login rejected: incorrect password"
            );
            return Err(ValidationError::InvalidPassword);
        }

        info!(
            email = %record.identity.email,
            role = %record.identity.role,
            "Credentials validated"
        );
        Ok(record.identity)
    }

    /// Sleep for the configured delay, approximating the round trip a remote
    /// directory would cost
    async fn simulate_round_trip(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
