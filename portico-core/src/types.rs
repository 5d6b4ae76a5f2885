//! Core identity types
//!
//! Defines the role classification and the authenticated identity shared by
//! every layer of the portico system.

use serde::{Deserialize, Serialize};

/// Access role classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System administrator with access to the admin console
    Admin,
    /// Regular user with access to the user workspace
    User,
}

impl Role {
    /// Landing page for this role after login or redirect
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::User => "/user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Authenticated user identity
///
/// This is the record handed out by credential validation and carried by the
/// session for the rest of the browsing context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Unique user identifier
    pub id: String,
    /// Login email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Role deciding which area this identity may enter
    pub role: Role,
    /// Avatar image URL (optional)
    pub avatar: Option<String>,
}

impl Identity {
    /// Get user display string
    pub fn display_string(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}
