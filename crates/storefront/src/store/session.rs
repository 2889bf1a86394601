//! Signed-in user and ephemeral UI toggles.

use glassshop_core::{Email, UserId};
use serde::{Deserialize, Serialize};

/// The signed-in shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// Which form the auth modal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthModalMode {
    #[default]
    Login,
    Register,
}

impl AuthModalMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }
}

/// UI flags that live only for the current session and are never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub auth_modal_open: bool,
    pub auth_modal_mode: AuthModalMode,
    pub mobile_menu_open: bool,
}
