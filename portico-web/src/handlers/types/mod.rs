//! Request and response types for the HTTP handlers

pub mod admin;
pub mod auth;
pub mod common;
pub mod user;

pub use admin::*;
pub use auth::*;
pub use common::*;
pub use user::*;
