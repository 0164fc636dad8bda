use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use sk_core::{
    device::{Device, DeviceDraft},
    ids::DeviceId,
    persistence::DEVICES_KEY,
    ports::{ClockPort, DeviceRepositoryPort, KeyValueStorePort, RepositoryError},
};

use crate::store::JsonCollection;

pub struct KvDeviceRepository {
    collection: JsonCollection<Device>,
    clock: Arc<dyn ClockPort>,
}

impl KvDeviceRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            collection: JsonCollection::new(store, DEVICES_KEY),
            clock,
        }
    }
}

#[async_trait]
impl DeviceRepositoryPort for KvDeviceRepository {
    async fn save(&self, mut draft: DeviceDraft) -> Result<Device, RepositoryError> {
        let shadowing = draft.details.drop_shadowing_extra();
        if !shadowing.is_empty() {
            warn!(keys = ?shadowing, "extra fields named like device fields discarded");
        }

        let _guard = self.collection.lock().await;
        let mut devices = self.collection.load().await?;
        let now = self.clock.now();

        let existing = draft
            .id
            .as_ref()
            .and_then(|id| devices.iter().position(|d| &d.id == id));

        let saved = match existing {
            Some(index) => {
                let device = &mut devices[index];
                device.details = draft.details;
                device.updated_at = now;
                debug!(device_id = %device.id, "device replaced in place");
                device.clone()
            }
            None => {
                let device = Device {
                    id: draft.id.unwrap_or_default(),
                    details: draft.details,
                    created_at: now,
                    updated_at: now,
                };
                debug!(device_id = %device.id, "device appended");
                devices.push(device.clone());
                device
            }
        };

        self.collection.write(&devices).await?;
        Ok(saved)
    }

    async fn list_all(&self) -> Result<Vec<Device>, RepositoryError> {
        self.collection.load().await
    }

    async fn find_by_id(&self, id: &DeviceId) -> Result<Option<Device>, RepositoryError> {
        Ok(self
            .collection
            .load()
            .await?
            .into_iter()
            .find(|d| &d.id == id))
    }

    async fn find_by_imei(&self, imei: &str) -> Result<Option<Device>, RepositoryError> {
        let imei = imei.trim();
        Ok(self
            .collection
            .load()
            .await?
            .into_iter()
            .find(|d| d.details.imei.as_deref().map(str::trim) == Some(imei)))
    }

    async fn delete(&self, id: &DeviceId) -> Result<(), RepositoryError> {
        let _guard = self.collection.lock().await;
        let mut devices = self.collection.load().await?;
        let before = devices.len();
        devices.retain(|d| &d.id != id);

        self.collection.write(&devices).await?;
        if devices.len() < before {
            info!(device_id = %id, "device deleted");
        } else {
            debug!(device_id = %id, "delete of unknown device ignored");
        }
        Ok(())
    }

    async fn search(&self, query: &str) -> Result<Vec<Device>, RepositoryError> {
        let devices = self.collection.load().await?;
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(devices);
        }

        Ok(devices
            .into_iter()
            .filter(|d| d.matches_lowercase(&needle))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::InMemoryKeyValueStore;
    use crate::repositories::test_support::SteppingClock;
    use sk_core::device::{DeviceDetails, DeviceStatus};
    use sk_core::persistence::quarantine_key;

    fn repo_with_store() -> (KvDeviceRepository, Arc<InMemoryKeyValueStore>) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = KvDeviceRepository::new(store.clone(), Arc::new(SteppingClock::new()));
        (repo, store)
    }

    fn iphone(id: &str) -> DeviceDraft {
        DeviceDraft::with_id(
            id,
            DeviceDetails {
                imei: Some(format!("35{id}")),
                model_name: Some("iPhone 14".into()),
                purchase_price: Some("100".into()),
                status: Some(DeviceStatus::StockIn),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn save_then_find_round_trips_with_fresh_timestamps() {
        let (repo, _) = repo_with_store();
        let draft = iphone("1");

        let saved = repo.save(draft.clone()).await.unwrap();
        let found = repo.find_by_id(&DeviceId::from("1")).await.unwrap().unwrap();

        assert_eq!(found, saved);
        assert_eq!(found.details, draft.details);
        assert_eq!(found.created_at, found.updated_at);
    }

    #[tokio::test]
    async fn extra_fields_cannot_corrupt_the_collection() {
        let (repo, _) = repo_with_store();
        let mut draft = iphone("1");
        draft.details.extra.insert("box".into(), "yes".into());
        draft.details.extra.insert("updatedAt".into(), "never".into());
        draft.details.extra.insert("warranty".into(), "6 months".into());

        let saved = repo.save(draft).await.unwrap();
        let all = repo.list_all().await.unwrap();

        assert_eq!(all, vec![saved]);
        assert!(!all[0].details.accessories.has_box);
        assert_eq!(all[0].details.extra.len(), 1);
        assert_eq!(all[0].details.extra["warranty"], "6 months");
    }

    #[tokio::test]
    async fn save_without_id_generates_one() {
        let (repo, _) = repo_with_store();

        let saved = repo
            .save(DeviceDraft::new(DeviceDetails::default()))
            .await
            .unwrap();

        assert!(!saved.id.as_str().is_empty());
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_keeps_identity_and_created_at() {
        let (repo, _) = repo_with_store();
        let first = repo.save(iphone("1")).await.unwrap();

        let mut changed = iphone("1");
        changed.details.model_name = Some("X".into());
        let second = repo.save(changed).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].details.model_name.as_deref(), Some("X"));
        assert_eq!(second.created_at, first.created_at);
        assert!(all[0].updated_at > all[0].created_at);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let (repo, _) = repo_with_store();
        for id in ["c", "a", "b"] {
            repo.save(iphone(id)).await.unwrap();
        }
        repo.save(iphone("a")).await.unwrap();

        let ids: Vec<_> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (repo, _) = repo_with_store();
        repo.save(iphone("1")).await.unwrap();

        repo.delete(&DeviceId::from("missing")).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap().len(), 1);

        repo.delete(&DeviceId::from("1")).await.unwrap();
        repo.delete(&DeviceId::from("1")).await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_is_case_insensitive_over_identifying_fields() {
        let (repo, _) = repo_with_store();
        repo.save(iphone("1")).await.unwrap();
        repo.save(DeviceDraft::with_id(
            "2",
            DeviceDetails {
                model_name: Some("Galaxy S23".into()),
                sku: Some("SAM-S23-BLK".into()),
                ..Default::default()
            },
        ))
        .await
        .unwrap();

        let hits = |results: Vec<Device>| -> Vec<String> {
            results.into_iter().map(|d| d.id.into_inner()).collect()
        };

        assert_eq!(hits(repo.search("iphone").await.unwrap()), vec!["1"]);
        assert_eq!(hits(repo.search("14").await.unwrap()), vec!["1"]);
        assert_eq!(hits(repo.search("sam-s23").await.unwrap()), vec!["2"]);
        assert_eq!(hits(repo.search("351").await.unwrap()), vec!["1"]);
        assert!(repo.search("pixel").await.unwrap().is_empty());
        assert_eq!(repo.search("   ").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_by_imei_requires_exact_match() {
        let (repo, _) = repo_with_store();
        repo.save(iphone("1")).await.unwrap();

        assert!(repo.find_by_imei("351").await.unwrap().is_some());
        assert!(repo.find_by_imei("35").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn absent_key_is_empty_not_an_error() {
        let (repo, _) = repo_with_store();
        assert!(repo.list_all().await.unwrap().is_empty());
        assert!(repo.find_by_id(&DeviceId::from("1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupt_payload_is_quarantined_and_never_overwritten() {
        let store = Arc::new(InMemoryKeyValueStore::with_entries([(
            DEVICES_KEY,
            "[{\"id\": \"1\", broken",
        )]));
        let repo = KvDeviceRepository::new(store.clone(), Arc::new(SteppingClock::new()));

        let err = repo.list_all().await.unwrap_err();
        assert!(err.is_corrupt());

        let err = repo.save(iphone("2")).await.unwrap_err();
        assert!(err.is_corrupt());

        assert_eq!(
            store.get(DEVICES_KEY).await.unwrap().as_deref(),
            Some("[{\"id\": \"1\", broken")
        );
        assert_eq!(
            store.get(&quarantine_key(DEVICES_KEY)).await.unwrap().as_deref(),
            Some("[{\"id\": \"1\", broken")
        );
    }

    #[tokio::test]
    async fn non_array_payload_is_corrupt() {
        let store = Arc::new(InMemoryKeyValueStore::with_entries([(DEVICES_KEY, "{}")]));
        let repo = KvDeviceRepository::new(store, Arc::new(SteppingClock::new()));

        assert!(repo.list_all().await.unwrap_err().is_corrupt());
    }

    #[tokio::test]
    async fn legacy_records_load_in_canonical_form_and_are_rewritten_canonically() {
        let store = Arc::new(InMemoryKeyValueStore::with_entries([(
            DEVICES_KEY,
            r#"[{"id":"1","modelName":"Nokia 3310","status":"In Stock",
                 "createdAt":"2023-01-01T00:00:00.000Z","updatedAt":"2023-01-01T00:00:00.000Z"}]"#,
        )]));
        let repo = KvDeviceRepository::new(store.clone(), Arc::new(SteppingClock::new()));

        let devices = repo.list_all().await.unwrap();
        assert_eq!(devices[0].status(), Some(DeviceStatus::StockIn));

        repo.save(iphone("2")).await.unwrap();
        let raw = store.get(DEVICES_KEY).await.unwrap().unwrap();
        let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored[0]["deviceStatus"], "StockIn");
        assert!(stored[0].get("status").is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn overlapping_saves_do_not_lose_updates() {
        let (repo, _) = repo_with_store();
        let repo = Arc::new(repo);

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.save(iphone(&i.to_string())).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(repo.list_all().await.unwrap().len(), 16);
    }
}
