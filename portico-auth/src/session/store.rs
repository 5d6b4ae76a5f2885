//! Session Store - Single source of truth for the authenticated session
//!
//! The in-memory identity is authoritative; the persisted copy exists so the
//! same browsing context can pick its session back up after a restart.
//! Persistence failures are logged and never fail the operation.

use super::storage::SessionFile;
use super::types::SessionRecord;
use portico_core::Identity;
use tracing::{debug, info, warn};

/// The authenticated session for this browsing context
///
/// At any instant the session is either empty or holds exactly one
/// fully-populated identity. It is mutated only by [`commit`](Self::commit)
/// and [`clear`](Self::clear).
pub struct SessionStore {
    current: Option<Identity>,
    storage: SessionFile,
}

impl SessionStore {
    /// Create an empty session store backed by the given storage
    pub fn new(storage: SessionFile) -> Self {
        Self {
            current: None,
            storage,
        }
    }

    /// The currently authenticated identity, if any
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Adopt `identity` as the current session, replacing any prior one
    pub fn commit(&mut self, identity: Identity) {
        let record = SessionRecord::from(&identity);
        if let Err(e) = self.storage.save(&record) {
            warn!(
                error = %e,
                "Could not persist session record, session continues in memory"
            );
        }

        info!(
            email = %identity.email,
            role = %identity.role,
            "Session committed"
        );
        self.current = Some(identity);
    }

    /// Empty the session and remove the persisted copy
    ///
    /// Clearing an already-empty session is a no-op.
    pub fn clear(&mut self) {
        if let Err(e) = self.storage.delete() {
            warn!(error = %e, "Could not remove persisted session record");
        }

        if let Some(identity) = self.current.take() {
            info!(email = %identity.email, "Session cleared");
        }
    }

    /// Restore the session a previous run of this browsing context persisted
    ///
    /// Runs once at startup, before any access check. Anything that does not
    /// parse into a record with a recognized role is discarded with a warning
    /// and the session stays empty; rehydration never fails the caller.
    pub fn rehydrate(&mut self) {
        let record = match self.storage.load() {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!("No persisted session record found");
                return;
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable session record");
                return;
            }
        };

        match Identity::try_from(record) {
            Ok(identity) => {
                info!(
                    email = %identity.email,
                    role = %identity.role,
                    "Session rehydrated"
                );
                self.current = Some(identity);
            }
            Err(e) => {
                warn!(error = %e, "Discarding persisted session record");
            }
        }
    }
}
