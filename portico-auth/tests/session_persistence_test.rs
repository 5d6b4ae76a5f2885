//! Integration tests for session persistence and rehydration

use portico_auth::{SessionFile, SessionStore, AUTH_SESSION_KEY};
use portico_core::{Identity, Role};
use std::path::Path;

fn store_at(dir: &Path) -> SessionStore {
    SessionStore::new(SessionFile::new(dir).unwrap())
}

fn user_identity() -> Identity {
    Identity {
        id: "2".to_string(),
        email: "user@test.com".to_string(),
        name: "John Doe".to_string(),
        role: Role::User,
        avatar: None,
    }
}

fn record_path(dir: &Path) -> std::path::PathBuf {
    dir.join(format!("{}.json", AUTH_SESSION_KEY))
}

#[test]
fn test_commit_then_rehydrate_restores_the_identity() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = store_at(dir.path());
    store.commit(user_identity());
    drop(store);

    // A fresh store over the same directory picks the session back up
    let mut restored = store_at(dir.path());
    assert!(restored.current().is_none());

    restored.rehydrate();
    let identity = restored.current().expect("session should be restored");
    assert_eq!(identity.id, "2");
    assert_eq!(identity.email, "user@test.com");
    assert_eq!(identity.name, "John Doe");
    assert_eq!(identity.role, Role::User);
}

#[test]
fn test_rehydrate_without_prior_commit_leaves_the_session_empty() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = store_at(dir.path());
    store.rehydrate();
    assert!(store.current().is_none());
}

#[test]
fn test_rehydrate_discards_corrupted_data() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(dir.path());

    std::fs::write(record_path(dir.path()), "not json at all {{{").unwrap();

    store.rehydrate();
    assert!(store.current().is_none());
}

#[test]
fn test_rehydrate_discards_records_with_an_unrecognized_role() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(dir.path());

    let record = r#"{"id":"9","email":"x@test.com","name":"X","role":"superuser","avatar":null}"#;
    std::fs::write(record_path(dir.path()), record).unwrap();

    store.rehydrate();
    assert!(store.current().is_none());
}

#[test]
fn test_rehydrate_discards_records_with_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(dir.path());

    let record = r#"{"id":"2","email":"user@test.com","role":"user"}"#;
    std::fs::write(record_path(dir.path()), record).unwrap();

    store.rehydrate();
    assert!(store.current().is_none());
}

#[test]
fn test_clear_removes_the_persisted_record() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = store_at(dir.path());
    store.commit(user_identity());
    assert!(record_path(dir.path()).exists());

    store.clear();
    assert!(store.current().is_none());
    assert!(!record_path(dir.path()).exists());

    // The cleared session stays gone across a restart
    let mut restored = store_at(dir.path());
    restored.rehydrate();
    assert!(restored.current().is_none());
}

#[test]
fn test_clearing_an_empty_session_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = store_at(dir.path());
    store.clear();
    assert!(store.current().is_none());
}

#[test]
fn test_commit_overwrites_the_prior_session() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = store_at(dir.path());
    store.commit(user_identity());

    let admin = Identity {
        id: "1".to_string(),
        email: "admin@test.com".to_string(),
        name: "Admin User".to_string(),
        role: Role::Admin,
        avatar: None,
    };
    store.commit(admin);

    let current = store.current().expect("session should hold the new identity");
    assert_eq!(current.id, "1");
    assert_eq!(current.role, Role::Admin);

    // The persisted copy follows the replacement
    let mut restored = store_at(dir.path());
    restored.rehydrate();
    assert_eq!(restored.current().unwrap().id, "1");
}
