//! Dependency grouping for [`InventoryState`](crate::InventoryState).
//!
//! Not a builder: every port is required and nothing is defaulted.

use std::sync::Arc;

use sk_core::ports::*;

pub struct AppDeps {
    // Repositories
    pub device_repo: Arc<dyn DeviceRepositoryPort>,
    pub inventory_repo: Arc<dyn InventoryRepositoryPort>,
    pub auth_repo: Arc<dyn AuthStateRepositoryPort>,

    // Raw store, only for wholesale resets
    pub store: Arc<dyn KeyValueStorePort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
