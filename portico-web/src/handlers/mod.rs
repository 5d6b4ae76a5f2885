//! HTTP request handlers for the Portico web server
//!
//! This module contains all the HTTP request handlers organized by functionality.

pub mod admin;
pub mod auth;
pub mod health;
pub mod pages;
pub mod types;
pub mod user;

// Re-export all handler functions to keep the route definitions terse
pub use admin::*;
pub use auth::*;
pub use health::*;
pub use pages::*;
pub use user::*;

// Re-export all types for convenience
pub use types::*;
