//! # Core Library
//!
//! Configuration, centralized error handling, and the credential store
//! (user model plus repository) for the FlowGen auth service.

pub mod config;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use model::store::{create_pool, DbPool};
