use async_trait::async_trait;

use crate::{
    ids::ItemId,
    inventory::{InventoryItem, InventoryItemDraft},
    ports::errors::RepositoryError,
};

#[async_trait]
pub trait InventoryRepositoryPort: Send + Sync {
    /// Insert or replace by id, same timestamp discipline as devices.
    async fn save(&self, draft: InventoryItemDraft) -> Result<InventoryItem, RepositoryError>;

    /// All items in insertion order.
    async fn list_all(&self) -> Result<Vec<InventoryItem>, RepositoryError>;

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<InventoryItem>, RepositoryError>;
}
