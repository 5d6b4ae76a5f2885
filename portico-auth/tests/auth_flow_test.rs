//! Integration tests for the credential validation and access control flow

use portico_auth::{
    AccessDecision, AccessGuard, CredentialValidator, Directory, RouteTable, SessionFile,
    SessionStore, StaticDirectory, ValidationError,
};
use portico_core::Role;
use std::sync::Arc;
use std::time::Duration;

fn validator() -> CredentialValidator {
    CredentialValidator::new(Arc::new(StaticDirectory::with_demo_accounts()))
        .with_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_unknown_email_fails_with_account_not_found() {
    let validator = validator();

    let error = validator.validate("nobody@x.com", "x").await.unwrap_err();
    assert_eq!(error, ValidationError::AccountNotFound);

    // The reason does not depend on the secret supplied
    let error = validator
        .validate("nobody@x.com", "admin123")
        .await
        .unwrap_err();
    assert_eq!(error, ValidationError::AccountNotFound);
}

#[tokio::test]
async fn test_wrong_secret_fails_with_invalid_password() {
    let validator = validator();

    let error = validator
        .validate("user@test.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(error, ValidationError::InvalidPassword);
}

#[tokio::test]
async fn test_valid_credentials_return_the_directory_identity() {
    let validator = validator();

    let identity = validator
        .validate("admin@test.com", "admin123")
        .await
        .unwrap();
    assert_eq!(identity.id, "1");
    assert_eq!(identity.email, "admin@test.com");
    assert_eq!(identity.name, "Admin User");
    assert_eq!(identity.role, Role::Admin);

    let identity = validator.validate("user@test.com", "user123").await.unwrap();
    assert_eq!(identity.id, "2");
    assert_eq!(identity.name, "John Doe");
    assert_eq!(identity.role, Role::User);
}

#[tokio::test]
async fn test_email_matching_ignores_case_and_whitespace() {
    let validator = validator();

    let identity = validator
        .validate("  ADMIN@TEST.COM ", "admin123")
        .await
        .unwrap();
    assert_eq!(identity.role, Role::Admin);

    let directory = StaticDirectory::with_demo_accounts();
    let record = directory.lookup(" User@Test.Com ").await.unwrap();
    assert_eq!(record.identity.email, "user@test.com");
}

#[tokio::test]
async fn test_rejection_messages_are_distinct() {
    assert_eq!(
        ValidationError::AccountNotFound.to_string(),
        "Account not found. Please check your email."
    );
    assert_eq!(
        ValidationError::InvalidPassword.to_string(),
        "Invalid password. Please try again."
    );
}

#[tokio::test]
async fn test_validation_pays_the_simulated_round_trip() {
    let validator = CredentialValidator::new(Arc::new(StaticDirectory::with_demo_accounts()))
        .with_delay(Duration::from_millis(50));

    let start = std::time::Instant::now();
    validator
        .validate("admin@test.com", "admin123")
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn test_full_login_to_logout_flow() {
    let validator = validator();
    let guard = AccessGuard::new(RouteTable::with_defaults());

    let dir = tempfile::tempdir().unwrap();
    let mut session = SessionStore::new(SessionFile::new(dir.path()).unwrap());

    // Sign in as the admin account
    let identity = validator
        .validate("ADMIN@TEST.COM", "admin123")
        .await
        .unwrap();
    session.commit(identity);

    // The admin session may enter the admin area but not the user area
    assert_eq!(
        guard.check(&session, "admin").unwrap(),
        AccessDecision::Allow
    );
    assert_eq!(
        guard.check(&session, "user").unwrap(),
        AccessDecision::RedirectToHome("/admin")
    );

    // After logout every guarded area redirects to login
    session.clear();
    assert_eq!(
        guard.check(&session, "admin").unwrap(),
        AccessDecision::RedirectToLogin
    );
    assert_eq!(
        guard.check(&session, "user").unwrap(),
        AccessDecision::RedirectToLogin
    );

    println!("✅ Full login/logout flow verified");
}
