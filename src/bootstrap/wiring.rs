//! # Dependency wiring
//!
//! The only place that knows about `sk-infra` and `sk-app` at the same time.
//! It assembles adapters into [`AppDeps`]; it makes no business decisions.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use sk_app::{AppDeps, InventoryState};
use sk_core::config::AppConfig;
use sk_core::ports::{ClockPort, KeyValueStorePort};
use sk_infra::{
    FileKeyValueStore, InMemoryKeyValueStore, KvAuthStateRepository, KvDeviceRepository,
    KvInventoryRepository, SystemClock,
};

fn create_store(config: &AppConfig) -> anyhow::Result<Arc<dyn KeyValueStorePort>> {
    if config.in_memory {
        info!("using in-memory store; nothing will be persisted");
        return Ok(Arc::new(InMemoryKeyValueStore::new()));
    }

    if config.data_dir.as_os_str().is_empty() {
        anyhow::bail!("storage.data_dir is empty and in_memory is off");
    }
    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!("Failed to create data dir: {}", config.data_dir.display())
    })?;
    info!(data_dir = %config.data_dir.display(), "using file store");
    Ok(Arc::new(FileKeyValueStore::new(config.data_dir.clone())))
}

/// Builds every port implementation from the configuration.
pub fn wire_dependencies(config: &AppConfig) -> anyhow::Result<AppDeps> {
    let store = create_store(config)?;
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    Ok(AppDeps {
        device_repo: Arc::new(KvDeviceRepository::new(store.clone(), clock.clone())),
        inventory_repo: Arc::new(KvInventoryRepository::new(store.clone(), clock.clone())),
        auth_repo: Arc::new(KvAuthStateRepository::new(store.clone())),
        store,
        clock,
    })
}

pub fn build_state(config: &AppConfig) -> anyhow::Result<InventoryState> {
    Ok(InventoryState::new(wire_dependencies(config)?))
}
