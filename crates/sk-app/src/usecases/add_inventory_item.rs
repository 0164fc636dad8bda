use std::sync::Arc;
use tracing::info;

use sk_core::{
    inventory::{InventoryItem, InventoryItemDraft},
    ports::InventoryRepositoryPort,
};

use crate::error::InventoryError;

pub struct AddInventoryItem {
    inventory_repo: Arc<dyn InventoryRepositoryPort>,
}

impl AddInventoryItem {
    pub fn new(inventory_repo: Arc<dyn InventoryRepositoryPort>) -> Self {
        Self { inventory_repo }
    }

    #[tracing::instrument(name = "usecase.add_inventory_item.execute", skip_all)]
    pub async fn execute(&self, draft: InventoryItemDraft) -> Result<InventoryItem, InventoryError> {
        let item = self.inventory_repo.save(draft).await?;
        info!(item_id = %item.id, name = %item.details.name, "inventory item saved");
        Ok(item)
    }
}
