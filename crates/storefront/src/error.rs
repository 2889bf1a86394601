//! Unified error handling.
//!
//! Store operations are total and never fail; `AppError` covers everything
//! around them that can: configuration, explicit flushes, form validation
//! and lookups requested by the front end.

use thiserror::Error;

use crate::auth::AuthError;
use crate::config::ConfigError;
use crate::persistence::PersistenceError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot storage failed.
    #[error("Storage error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Form validation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad input from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::BadRequest(_) | Self::Auth(_) => 2,
            Self::NotFound(_) => 3,
            Self::Config(_) => 78,
            Self::Persistence(_) => 74,
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
