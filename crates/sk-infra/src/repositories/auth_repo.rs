use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use sk_core::{
    auth::AuthState,
    persistence::AUTH_KEY,
    ports::{AuthStateRepositoryPort, KeyValueStorePort, RepositoryError},
};

use crate::store::decode_document;

pub struct KvAuthStateRepository {
    store: Arc<dyn KeyValueStorePort>,
}

impl KvAuthStateRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthStateRepositoryPort for KvAuthStateRepository {
    async fn save(&self, state: &AuthState) -> Result<(), RepositoryError> {
        let payload = serde_json::to_string(state).map_err(|e| RepositoryError::Serialize {
            key: AUTH_KEY.to_string(),
            reason: e.to_string(),
        })?;
        self.store.set(AUTH_KEY, &payload).await?;
        debug!(role = ?state.user_role, "auth state saved");
        Ok(())
    }

    async fn load(&self) -> Result<Option<AuthState>, RepositoryError> {
        match self.store.get(AUTH_KEY).await? {
            Some(raw) if !raw.trim().is_empty() => {
                let state = decode_document(self.store.as_ref(), AUTH_KEY, &raw).await?;
                Ok(Some(state))
            }
            _ => Ok(None),
        }
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.store.remove(AUTH_KEY).await?;
        debug!("auth state cleared");
        Ok(())
    }
}
