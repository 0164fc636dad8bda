use std::sync::Arc;
use tracing::{info, warn};

use sk_core::{
    device::{Device, DeviceDraft, DevicePatch},
    ids::DeviceId,
    ports::DeviceRepositoryPort,
};

use crate::error::InventoryError;

/// Applies a partial update to an existing device.
///
/// Status changes are not guarded here: staff may move a sold unit back to
/// stock to correct a mistake. Use [`StockOutDevice`](super::StockOutDevice)
/// to record sales.
pub struct UpdateDevice {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl UpdateDevice {
    pub fn new(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    #[tracing::instrument(
        name = "usecase.update_device.execute",
        skip(self, patch),
        fields(device_id = %id)
    )]
    pub async fn execute(&self, id: &DeviceId, patch: DevicePatch) -> Result<Device, InventoryError> {
        let Some(mut device) = self.device_repo.find_by_id(id).await? else {
            warn!("update requested for unknown device");
            return Err(InventoryError::DeviceNotFound(id.to_string()));
        };

        patch.apply_to(&mut device.details);
        let saved = self.device_repo.save(DeviceDraft::from(device)).await?;
        info!("device updated");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{echo, stored, MockDeviceRepo};
    use sk_core::device::DeviceStatus;

    #[tokio::test]
    async fn patch_is_merged_onto_stored_record() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored(id.as_str(), Some(DeviceStatus::StockIn)))));
        repo.expect_save()
            .withf(|draft| {
                draft.id.as_ref().map(DeviceId::as_str) == Some("7")
                    && draft.details.color.as_deref() == Some("Blue")
                    && draft.details.model_name.as_deref() == Some("iPhone 14")
            })
            .times(1)
            .returning(|draft| Ok(echo(draft)));

        let uc = UpdateDevice::new(Arc::new(repo));
        let patch = DevicePatch {
            color: Some("Blue".into()),
            ..Default::default()
        };
        let device = uc.execute(&DeviceId::from("7"), patch).await.unwrap();

        assert_eq!(device.details.color.as_deref(), Some("Blue"));
    }

    #[tokio::test]
    async fn unknown_device_is_not_found_and_nothing_is_written() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_save().never();

        let uc = UpdateDevice::new(Arc::new(repo));
        let err = uc
            .execute(&DeviceId::from("missing"), DevicePatch::default())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn sold_device_can_be_corrected_back_to_stock() {
        let mut repo = MockDeviceRepo::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(stored(id.as_str(), Some(DeviceStatus::StockOut)))));
        repo.expect_save().returning(|draft| Ok(echo(draft)));

        let uc = UpdateDevice::new(Arc::new(repo));
        let patch = DevicePatch {
            status: Some(DeviceStatus::StockIn),
            ..Default::default()
        };
        let device = uc.execute(&DeviceId::from("3"), patch).await.unwrap();

        assert!(device.is_in_stock());
    }
}
