//! Login, logout and start-up session restore.
//!
//! Login records the chosen role only; no credentials are checked.

use std::sync::Arc;
use tracing::{info, warn};

use sk_core::{
    auth::{AuthState, UserRole},
    ports::AuthStateRepositoryPort,
};

use crate::error::InventoryError;

pub struct Login {
    auth_repo: Arc<dyn AuthStateRepositoryPort>,
}

impl Login {
    pub fn new(auth_repo: Arc<dyn AuthStateRepositoryPort>) -> Self {
        Self { auth_repo }
    }

    #[tracing::instrument(name = "usecase.login.execute", skip(self), fields(role = %role))]
    pub async fn execute(&self, role: UserRole) -> Result<AuthState, InventoryError> {
        let state = AuthState::logged_in(role);
        self.auth_repo.save(&state).await?;
        info!("operator logged in");
        Ok(state)
    }
}

pub struct Logout {
    auth_repo: Arc<dyn AuthStateRepositoryPort>,
}

impl Logout {
    pub fn new(auth_repo: Arc<dyn AuthStateRepositoryPort>) -> Self {
        Self { auth_repo }
    }

    #[tracing::instrument(name = "usecase.logout.execute", skip(self))]
    pub async fn execute(&self) -> Result<(), InventoryError> {
        self.auth_repo.clear().await?;
        info!("operator logged out");
        Ok(())
    }
}

pub struct RestoreSession {
    auth_repo: Arc<dyn AuthStateRepositoryPort>,
}

impl RestoreSession {
    pub fn new(auth_repo: Arc<dyn AuthStateRepositoryPort>) -> Self {
        Self { auth_repo }
    }

    /// The persisted session, or a logged-out state when none exists.
    ///
    /// An unreadable record (already quarantined by the repository) also
    /// restores as logged out; the next login overwrites it.
    #[tracing::instrument(name = "usecase.restore_session.execute", skip(self))]
    pub async fn execute(&self) -> Result<AuthState, InventoryError> {
        let state = match self.auth_repo.load().await {
            Ok(stored) => stored.unwrap_or_default(),
            Err(err) if err.is_corrupt() => {
                warn!(error = %err, "stored session unreadable, starting logged out");
                AuthState::default()
            }
            Err(err) => return Err(err.into()),
        };
        info!(
            authenticated = state.is_authenticated,
            role = ?state.user_role,
            "session restored"
        );
        Ok(state)
    }
}
