//! Portico Core - Core data structures and shared infrastructure
//!
//! This module defines the core types, error handling, and logging used across
//! the portico system

pub mod error;
pub mod logging;
pub mod types;

pub use error::*;
pub use logging::*;
pub use types::*;

// Re-export commonly used external types
pub use tracing;
