//! Mock authentication and profile editing.
//!
//! There is no backend: a form that validates produces a [`User`] with a
//! fresh ID, and passwords are checked for shape only and then dropped.

mod error;

pub use error::AuthError;

use glassshop_core::{Email, UserId};
use tracing::info;

use crate::catalog::CITIES;
use crate::persistence::SnapshotStore;
use crate::store::{Store, User};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum display name length, in characters.
pub const MIN_NAME_LENGTH: usize = 2;

fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), AuthError> {
    if name.trim().chars().count() < MIN_NAME_LENGTH {
        return Err(AuthError::NameTooShort { min: MIN_NAME_LENGTH });
    }
    Ok(())
}

/// Sign-in form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Validate the form and produce the signed-in user.
    ///
    /// The display name is the local part of the email.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` or `AuthError::PasswordTooShort`.
    pub fn authenticate(&self) -> Result<User, AuthError> {
        let email = Email::parse(&self.email)?;
        validate_password(&self.password)?;

        Ok(User {
            id: UserId::generate(),
            name: email.local_part().to_string(),
            email,
            city: None,
        })
    }
}

/// Registration form.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Validate the form and produce the new user.
    ///
    /// # Errors
    ///
    /// Returns the first failing check: name, email, password length, then
    /// confirmation.
    pub fn register(&self) -> Result<User, AuthError> {
        validate_name(&self.name)?;
        let email = Email::parse(&self.email)?;
        validate_password(&self.password)?;
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        Ok(User {
            id: UserId::generate(),
            email,
            name: self.name.trim().to_string(),
            city: None,
        })
    }
}

/// Profile edit. Fields left as `None` are kept.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    /// An empty string clears the city.
    pub city: Option<String>,
}

impl ProfileUpdate {
    /// Apply this update to a copy of `user`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NameTooShort` for a too-short new name.
    pub fn apply_to(&self, user: &User) -> Result<User, AuthError> {
        let mut updated = user.clone();
        if let Some(name) = &self.name {
            validate_name(name)?;
            updated.name = name.trim().to_string();
        }
        if let Some(city) = &self.city {
            let city = city.trim();
            updated.city = (!city.is_empty()).then(|| city.to_string());
        }
        Ok(updated)
    }
}

/// Password change form. Validated only; nothing is stored.
#[derive(Debug, Clone, Default)]
pub struct PasswordChange {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    /// # Errors
    ///
    /// Returns `AuthError::PasswordMismatch` if the two fields differ, then
    /// `AuthError::PasswordTooShort` if the new password is too short.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.new_password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        validate_password(&self.new_password)
    }
}

/// Cities containing `query`, case-insensitively. A blank query matches all.
#[must_use]
pub fn suggest_cities(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    CITIES
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().contains(&needle))
        .collect()
}

impl<S: SnapshotStore> Store<S> {
    /// Sign in through the login form and close the auth modal.
    ///
    /// # Errors
    ///
    /// Returns the form's validation error; the store is left unchanged.
    pub fn sign_in(&mut self, form: &LoginForm) -> Result<&User, AuthError> {
        let user = form.authenticate()?;
        self.set_user(Some(user));
        self.close_auth_modal();
        self.user().ok_or(AuthError::NotSignedIn)
    }

    /// Register through the registration form and close the auth modal.
    ///
    /// # Errors
    ///
    /// Returns the form's validation error; the store is left unchanged.
    pub fn register(&mut self, form: &RegisterForm) -> Result<&User, AuthError> {
        let user = form.register()?;
        info!(email = %user.email, "Registered account");
        self.set_user(Some(user));
        self.close_auth_modal();
        self.user().ok_or(AuthError::NotSignedIn)
    }

    /// Sign out.
    pub fn sign_out(&mut self) {
        self.clear_user();
    }

    /// Edit the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotSignedIn` when nobody is signed in, or the
    /// update's validation error. The store is unchanged on error.
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> Result<&User, AuthError> {
        let current = self.user().ok_or(AuthError::NotSignedIn)?;
        let updated = update.apply_to(current)?;
        if &updated != current {
            info!(user_id = %updated.id, "Updated profile");
            self.set_user(Some(updated));
        }
        self.user().ok_or(AuthError::NotSignedIn)
    }
}
