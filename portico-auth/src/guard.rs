//! Access Guard
//!
//! The single enforcement point deciding whether the current session may
//! enter a role-scoped area.

use crate::routes::RouteTable;
use crate::session::SessionStore;
use portico_core::Role;
use tracing::debug;

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// The session may enter the area
    Allow,
    /// No session; the caller must be sent to the login page
    RedirectToLogin,
    /// Session present but for another role; the caller must be sent to the
    /// home of the role it actually holds
    RedirectToHome(&'static str),
}

/// Access check failure
///
/// A required role outside the recognized set is a configuration defect in
/// the caller, not a user-facing condition; it must not be retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    #[error("Unknown role required for access check: {role}")]
    UnknownRole { role: String },
}

/// Role-based access guard over a route table
pub struct AccessGuard {
    routes: RouteTable,
}

impl AccessGuard {
    /// Create a guard over the given route table
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    /// Decide whether the session may enter an area requiring `required_role`
    ///
    /// Evaluated fresh on every call; decisions are never cached, so a
    /// session cleared mid-navigation redirects on the very next check.
    pub fn check(
        &self,
        session: &SessionStore,
        required_role: &str,
    ) -> Result<AccessDecision, GuardError> {
        let required: Role = required_role.parse().map_err(|_| GuardError::UnknownRole {
            role: required_role.to_string(),
        })?;

        let identity = match session.current() {
            Some(identity) => identity,
            None => {
                debug!(required = %required, "Access check: no session");
                return Ok(AccessDecision::RedirectToLogin);
            }
        };

        if identity.role != required {
            debug!(
                required = %required,
                actual = %identity.role,
                "Access check: role mismatch"
            );
            // The redirect target is the home of the role the session actually
            // holds, never the requested one.
            return Ok(AccessDecision::RedirectToHome(identity.role.home_path()));
        }

        Ok(AccessDecision::Allow)
    }

    /// Decide whether the session may enter the area owning `path`
    ///
    /// Paths outside every guarded area pass through unconditionally.
    pub fn check_path(
        &self,
        session: &SessionStore,
        path: &str,
    ) -> Result<AccessDecision, GuardError> {
        match self.routes.required_role(path) {
            Some(role) => self.check(session, role),
            None => Ok(AccessDecision::Allow),
        }
    }
}
