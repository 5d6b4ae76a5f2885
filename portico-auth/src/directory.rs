//! Account Directory
//!
//! Authoritative source of known identities and their secrets. The directory
//! is read-only to the rest of the system; a production deployment can swap
//! the static table for a remote identity service behind the same trait.

use async_trait::async_trait;
use portico_core::{Identity, Role};
use std::collections::HashMap;
use tracing::info;

/// A directory entry pairing a shared secret with the identity it unlocks
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    /// Shared secret checked at login
    pub secret: String,
    /// Identity handed out on a successful match
    pub identity: Identity,
}

/// Lookup contract for account records
#[async_trait]
pub trait Directory: Send + Sync {
    /// Look up the record for an email address
    ///
    /// Implementations must match on the normalized form of the email, see
    /// [`normalize_email`].
    async fn lookup(&self, email: &str) -> Option<CredentialRecord>;
}

/// Normalize an email address for lookup
///
/// Surrounding whitespace is ignored and matching is case-insensitive, so
/// `"  Admin@Test.com "` resolves to the same record as `"admin@test.com"`.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Static in-memory directory
///
/// Records are keyed by normalized email. Secrets are stored as-is; hashing
/// belongs to whatever real directory replaces this one.
pub struct StaticDirectory {
    records: HashMap<String, CredentialRecord>,
}

impl StaticDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Create a directory seeded with the two demo accounts
    pub fn with_demo_accounts() -> Self {
        let mut directory = Self::new();

        directory.insert(
            "admin123",
            Identity {
                id: "1".to_string(),
                email: "admin@test.com".to_string(),
                name: "Admin User".to_string(),
                role: Role::Admin,
                avatar: None,
            },
        );
        directory.insert(
            "user123",
            Identity {
                id: "2".to_string(),
                email: "user@test.com".to_string(),
                name: "John Doe".to_string(),
                role: Role::User,
                avatar: None,
            },
        );

        info!(
            "Seeded static directory with {} demo accounts",
            directory.records.len()
        );
        directory
    }

    /// Add a record, keyed by the identity's normalized email
    pub fn insert(&mut self, secret: &str, identity: Identity) {
        self.records.insert(
            normalize_email(&identity.email),
            CredentialRecord {
                secret: secret.to_string(),
                identity,
            },
        );
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Directory for StaticDirectory {
    async fn lookup(&self, email: &str) -> Option<CredentialRecord> {
        self.records.get(&normalize_email(email)).cloned()
    }
}
