//! Authentication error types.

use thiserror::Error;

/// Errors returned by the sign-in, registration and profile forms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] glassshop_core::EmailError),

    /// Password shorter than the minimum length.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum length in characters.
        min: usize,
    },

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,

    /// Display name shorter than the minimum length.
    #[error("name must be at least {min} characters")]
    NameTooShort {
        /// Minimum length in characters.
        min: usize,
    },

    /// The operation needs a signed-in user.
    #[error("not signed in")]
    NotSignedIn,
}
