//! Session state persisted across restarts.
//!
//! Login does not verify credentials; it only records which role the
//! operator picked.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Manager,
    TeamMember,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Manager => "manager",
            UserRole::TeamMember => "team_member",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Singleton auth record. Overwritten on login, removed on logout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    #[serde(default)]
    pub user_role: Option<UserRole>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn logged_in(role: UserRole) -> Self {
        Self {
            user_role: Some(role),
            is_authenticated: true,
        }
    }

    pub fn is_manager(&self) -> bool {
        self.is_authenticated && self.user_role == Some(UserRole::Manager)
    }
}
