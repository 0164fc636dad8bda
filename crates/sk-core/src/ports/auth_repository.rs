//! Auth state port
//!
//! Persists the singleton session record. Every save is a full overwrite.

use async_trait::async_trait;

use crate::{auth::AuthState, ports::errors::RepositoryError};

#[async_trait]
pub trait AuthStateRepositoryPort: Send + Sync {
    async fn save(&self, state: &AuthState) -> Result<(), RepositoryError>;

    /// `None` if never saved, or cleared since.
    async fn load(&self) -> Result<Option<AuthState>, RepositoryError>;

    async fn clear(&self) -> Result<(), RepositoryError>;
}
