//! Session Management Module
//!
//! Holds the single authenticated session for this browsing context, with a
//! persisted copy so the session survives a restart.

pub mod storage;
pub mod store;
pub mod types;

pub use storage::SessionFile;
pub use store::SessionStore;
pub use types::{SessionRecord, AUTH_SESSION_KEY};
