use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use sk_core::{
    ids::ItemId,
    inventory::{InventoryItem, InventoryItemDraft},
    persistence::INVENTORY_KEY,
    ports::{ClockPort, InventoryRepositoryPort, KeyValueStorePort, RepositoryError},
};

use crate::store::JsonCollection;

pub struct KvInventoryRepository {
    collection: JsonCollection<InventoryItem>,
    clock: Arc<dyn ClockPort>,
}

impl KvInventoryRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            collection: JsonCollection::new(store, INVENTORY_KEY),
            clock,
        }
    }
}

#[async_trait]
impl InventoryRepositoryPort for KvInventoryRepository {
    async fn save(&self, mut draft: InventoryItemDraft) -> Result<InventoryItem, RepositoryError> {
        let shadowing = draft.details.drop_shadowing_extra();
        if !shadowing.is_empty() {
            warn!(keys = ?shadowing, "extra fields named like item fields discarded");
        }

        let _guard = self.collection.lock().await;
        let mut items = self.collection.load().await?;
        let now = self.clock.now();

        let existing = draft
            .id
            .as_ref()
            .and_then(|id| items.iter().position(|i| &i.id == id));

        let saved = match existing {
            Some(index) => {
                let item = &mut items[index];
                item.details = draft.details;
                item.updated_at = now;
                item.clone()
            }
            None => {
                let item = InventoryItem {
                    id: draft.id.unwrap_or_default(),
                    details: draft.details,
                    created_at: now,
                    updated_at: now,
                };
                items.push(item.clone());
                item
            }
        };

        self.collection.write(&items).await?;
        debug!(
            key = self.collection.key(),
            item_id = %saved.id,
            "inventory item saved"
        );
        Ok(saved)
    }

    async fn list_all(&self) -> Result<Vec<InventoryItem>, RepositoryError> {
        self.collection.load().await
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<InventoryItem>, RepositoryError> {
        Ok(self
            .collection
            .load()
            .await?
            .into_iter()
            .find(|i| &i.id == id))
    }
}
