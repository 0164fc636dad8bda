//! Application state façade
//!
//! [`InventoryState`] is the single in-memory source of truth the UI observes.
//! Every mutation runs under one writer lock, delegates to a use case and then
//! reloads devices, inventory and statistics from the store instead of
//! patching the cached views. Readers get cheap snapshot clones or subscribe
//! to changes through a `watch` channel.

use std::future::Future;

use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tracing::{error, info_span, warn, Instrument};

use sk_core::{
    auth::{AuthState, UserRole},
    device::{Device, DeviceDraft, DevicePatch, SaleDetails, StatusFilter},
    ids::DeviceId,
    inventory::{InventoryItem, InventoryItemDraft},
    statistics::StatisticsSnapshot,
    stock::{stock_lines, StockLine, StockLineFilter},
};

use crate::deps::AppDeps;
use crate::error::InventoryError;
use crate::usecases::{
    AddInventoryItem, ComputeStatistics, DeleteDevice, FindDeviceForStockOut, GetDeviceById,
    LoadInventoryData, Login, Logout, RegisterDevice, ResetData, RestoreSession, SearchDevices,
    StockOutDevice, UpdateDevice,
};

/// What the UI renders. Replaced wholesale after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub devices: Vec<Device>,
    pub inventory: Vec<InventoryItem>,
    pub statistics: StatisticsSnapshot,
    pub auth: AuthState,
    /// True while store I/O for a mutation or refresh is in flight.
    pub loading: bool,
}

pub struct InventoryState {
    deps: AppDeps,
    writer: Mutex<()>,
    snapshot: watch::Sender<InventorySnapshot>,
}

impl InventoryState {
    pub fn new(deps: AppDeps) -> Self {
        let (snapshot, _) = watch::channel(InventorySnapshot::default());
        Self {
            deps,
            writer: Mutex::new(()),
            snapshot,
        }
    }

    /// Current view. Never blocks on store I/O.
    pub fn snapshot(&self) -> InventorySnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<InventorySnapshot> {
        self.snapshot.subscribe()
    }

    pub fn statistics(&self) -> StatisticsSnapshot {
        self.snapshot.borrow().statistics
    }

    pub fn auth(&self) -> AuthState {
        self.snapshot.borrow().auth
    }

    /// Start-up sequence: restore the persisted session, then load all data.
    pub async fn initialize(&self) -> Result<(), InventoryError> {
        self.restore_session().await?;
        self.refresh_data().await
    }

    /// Reloads all three views from the store.
    pub async fn refresh_data(&self) -> Result<(), InventoryError> {
        let _writer = self.writer.lock().await;
        self.reload().await
    }

    pub async fn add_device(&self, draft: DeviceDraft) -> Result<Device, InventoryError> {
        let uc = RegisterDevice::new(self.deps.device_repo.clone());
        self.mutate("add_device", uc.execute(draft)).await
    }

    /// Merges `patch` into the stored device. Fails with `DeviceNotFound`
    /// when the id is unknown.
    pub async fn update_device(
        &self,
        id: &DeviceId,
        patch: DevicePatch,
    ) -> Result<Device, InventoryError> {
        let uc = UpdateDevice::new(self.deps.device_repo.clone());
        self.mutate("update_device", uc.execute(id, patch)).await
    }

    pub async fn delete_device(&self, id: &DeviceId) -> Result<(), InventoryError> {
        let uc = DeleteDevice::new(self.deps.device_repo.clone());
        self.mutate("delete_device", uc.execute(id)).await
    }

    /// Records a sale. The device must currently be in stock.
    pub async fn stock_out(
        &self,
        id: &DeviceId,
        sale: SaleDetails,
    ) -> Result<Device, InventoryError> {
        let uc = StockOutDevice::new(self.deps.device_repo.clone(), self.deps.clock.clone());
        self.mutate("stock_out", uc.execute(id, sale)).await
    }

    pub async fn add_inventory_item(
        &self,
        draft: InventoryItemDraft,
    ) -> Result<InventoryItem, InventoryError> {
        let uc = AddInventoryItem::new(self.deps.inventory_repo.clone());
        self.mutate("add_inventory_item", uc.execute(draft)).await
    }

    /// Removes devices, inventory and sync markers, keeping the session.
    pub async fn reset_data(&self) -> Result<(), InventoryError> {
        let uc = ResetData::new(self.deps.store.clone());
        self.mutate("reset_data", uc.execute()).await
    }

    /// A blank query answers from the snapshot without touching the store.
    pub async fn search_devices(&self, query: &str) -> Result<Vec<Device>, InventoryError> {
        self.search_devices_filtered(query, StatusFilter::All).await
    }

    pub async fn search_devices_filtered(
        &self,
        query: &str,
        filter: StatusFilter,
    ) -> Result<Vec<Device>, InventoryError> {
        if query.trim().is_empty() {
            let snapshot = self.snapshot.borrow();
            return Ok(snapshot
                .devices
                .iter()
                .filter(|device| filter.matches(device.status()))
                .cloned()
                .collect());
        }

        SearchDevices::new(self.deps.device_repo.clone())
            .execute(query, filter)
            .await
    }

    pub async fn get_device_by_id(&self, id: &DeviceId) -> Result<Option<Device>, InventoryError> {
        GetDeviceById::new(self.deps.device_repo.clone())
            .execute(id)
            .await
    }

    /// Looks up a scanned IMEI and checks it has not been sold.
    pub async fn find_for_stock_out(&self, imei: &str) -> Result<Device, InventoryError> {
        FindDeviceForStockOut::new(self.deps.device_repo.clone())
            .execute(imei)
            .await
    }

    /// Re-reads both collections instead of using the snapshot.
    pub async fn compute_statistics(&self) -> Result<StatisticsSnapshot, InventoryError> {
        ComputeStatistics::new(
            self.deps.device_repo.clone(),
            self.deps.inventory_repo.clone(),
        )
        .execute()
        .await
    }

    /// Stock screen rows built from the snapshot.
    pub fn stock_lines(&self, filter: StockLineFilter) -> Vec<StockLine> {
        let snapshot = self.snapshot.borrow();
        stock_lines(&snapshot.devices, &snapshot.inventory, filter)
    }

    pub async fn login(&self, role: UserRole) -> Result<AuthState, InventoryError> {
        let _writer = self.writer.lock().await;
        let state = Login::new(self.deps.auth_repo.clone()).execute(role).await?;
        self.snapshot.send_modify(|s| s.auth = state);
        Ok(state)
    }

    pub async fn logout(&self) -> Result<(), InventoryError> {
        let _writer = self.writer.lock().await;
        Logout::new(self.deps.auth_repo.clone()).execute().await?;
        self.snapshot.send_modify(|s| s.auth = AuthState::default());
        Ok(())
    }

    pub async fn restore_session(&self) -> Result<AuthState, InventoryError> {
        let _writer = self.writer.lock().await;
        let state = RestoreSession::new(self.deps.auth_repo.clone())
            .execute()
            .await?;
        self.snapshot.send_modify(|s| s.auth = state);
        Ok(state)
    }

    /// Runs `op` under the writer lock, then reloads every view.
    ///
    /// A failed reload after a successful write is logged and leaves the
    /// previous snapshot in place; the write itself still succeeded.
    async fn mutate<T, F>(&self, name: &'static str, op: F) -> Result<T, InventoryError>
    where
        F: Future<Output = Result<T, InventoryError>>,
    {
        let span = info_span!("state.mutate", op = name);

        async move {
            let _writer = self.writer.lock().await;
            self.snapshot.send_modify(|s| s.loading = true);

            let value = match op.await {
                Ok(value) => value,
                Err(err) => {
                    warn!(error = %err, "mutation failed");
                    self.snapshot.send_modify(|s| s.loading = false);
                    return Err(err);
                }
            };

            if let Err(err) = self.reload().await {
                error!(error = %err, "reload after mutation failed");
            }
            Ok(value)
        }
        .instrument(span)
        .await
    }

    /// Caller must hold the writer lock.
    async fn reload(&self) -> Result<(), InventoryError> {
        self.snapshot.send_modify(|s| s.loading = true);

        let loaded = LoadInventoryData::new(
            self.deps.device_repo.clone(),
            self.deps.inventory_repo.clone(),
        )
        .execute()
        .await;

        match loaded {
            Ok(data) => {
                self.snapshot.send_modify(|s| {
                    s.devices = data.devices;
                    s.inventory = data.inventory;
                    s.statistics = data.statistics;
                    s.loading = false;
                });
                Ok(())
            }
            Err(err) => {
                self.snapshot.send_modify(|s| s.loading = false);
                Err(err)
            }
        }
    }
}
