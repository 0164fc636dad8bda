use async_trait::async_trait;

use crate::{
    device::{Device, DeviceDraft},
    ids::DeviceId,
    ports::errors::RepositoryError,
};

#[async_trait]
pub trait DeviceRepositoryPort: Send + Sync {
    /// Insert or replace by id. Timestamps are assigned here, never by the caller.
    ///
    /// Replacing keeps the stored `created_at`; a draft without an id gets a
    /// freshly generated one.
    async fn save(&self, draft: DeviceDraft) -> Result<Device, RepositoryError>;

    /// All devices in insertion order.
    async fn list_all(&self) -> Result<Vec<Device>, RepositoryError>;

    async fn find_by_id(&self, id: &DeviceId) -> Result<Option<Device>, RepositoryError>;

    /// Exact IMEI lookup used when a unit is scanned at the counter.
    async fn find_by_imei(&self, imei: &str) -> Result<Option<Device>, RepositoryError>;

    /// Permanent removal. Deleting an unknown id succeeds.
    async fn delete(&self, id: &DeviceId) -> Result<(), RepositoryError>;

    /// Case-insensitive substring search over IMEI, model, serial number and SKU.
    ///
    /// A blank query returns every device.
    async fn search(&self, query: &str) -> Result<Vec<Device>, RepositoryError>;
}
