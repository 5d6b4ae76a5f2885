//! Session Types
//!
//! Defines the serialized shape of a persisted session.

use portico_core::{Identity, Role};
use serde::{Deserialize, Serialize};

/// Fixed storage key the session record is persisted under
pub const AUTH_SESSION_KEY: &str = "auth_user";

/// Serializable session record for persistence
///
/// The role is kept as a plain string so that rehydration can reject records
/// carrying a role this build does not recognize, instead of failing at the
/// parse step with no say in the matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionRecord {
    /// Unique user identifier
    pub id: String,
    /// Login email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Role name, "admin" or "user"
    pub role: String,
    /// Avatar image URL (optional)
    pub avatar: Option<String>,
}

impl From<&Identity> for SessionRecord {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.clone(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            role: identity.role.to_string(),
            avatar: identity.avatar.clone(),
        }
    }
}

impl TryFrom<SessionRecord> for Identity {
    type Error = String;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let role: Role = record.role.parse()?;

        Ok(Identity {
            id: record.id,
            email: record.email,
            name: record.name,
            role,
            avatar: record.avatar,
        })
    }
}
