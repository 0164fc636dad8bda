use std::sync::Arc;
use tracing::warn;

use sk_core::{persistence::RESETTABLE_KEYS, ports::KeyValueStorePort};

use crate::error::InventoryError;

/// Wipes devices, inventory and the reserved sync keys. The auth record stays.
pub struct ResetData {
    store: Arc<dyn KeyValueStorePort>,
}

impl ResetData {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "usecase.reset_data.execute", skip(self))]
    pub async fn execute(&self) -> Result<(), InventoryError> {
        self.store.multi_remove(&RESETTABLE_KEYS).await?;
        warn!(keys = ?RESETTABLE_KEYS, "inventory data reset");
        Ok(())
    }
}
