//! End-to-end flows through the state façade over the in-memory store.

use std::sync::Arc;

use sk_app::{AppDeps, InventoryError, InventoryState};
use sk_core::{
    auth::UserRole,
    device::{
        CustomerDetails, DeviceDetails, DeviceDraft, DevicePatch, DeviceStatus, PaymentMode,
        SaleDetails,
    },
    ids::DeviceId,
    inventory::InventoryItemDraft,
    persistence::{AUTH_KEY, DEVICES_KEY},
    ports::KeyValueStorePort,
    stock::StockLineFilter,
};
use sk_infra::{
    InMemoryKeyValueStore, KvAuthStateRepository, KvDeviceRepository, KvInventoryRepository,
    SystemClock,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("sk_app=debug,sk_infra=debug"))
        .with_test_writer()
        .try_init();
}

fn state_over(store: Arc<InMemoryKeyValueStore>) -> InventoryState {
    let clock = Arc::new(SystemClock);
    InventoryState::new(AppDeps {
        device_repo: Arc::new(KvDeviceRepository::new(store.clone(), clock.clone())),
        inventory_repo: Arc::new(KvInventoryRepository::new(store.clone(), clock.clone())),
        auth_repo: Arc::new(KvAuthStateRepository::new(store.clone())),
        store,
        clock,
    })
}

fn phone(imei: &str, model: &str, price: &str) -> DeviceDraft {
    DeviceDraft::stock_in(DeviceDetails {
        imei: Some(imei.to_string()),
        model_name: Some(model.to_string()),
        purchase_price: Some(price.to_string()),
        ..Default::default()
    })
}

#[tokio::test]
async fn registering_and_selling_updates_the_snapshot() {
    init_tracing();
    let state = state_over(Arc::new(InMemoryKeyValueStore::new()));
    let mut changes = state.subscribe();

    state.add_device(phone("111", "iPhone 14", "100")).await.unwrap();
    state.add_device(phone("222", "Galaxy S23", "200")).await.unwrap();
    assert!(changes.has_changed().unwrap());

    let stats = state.statistics();
    assert_eq!(stats.total_devices, 2);
    assert_eq!(stats.in_stock, 2);
    assert_eq!(stats.total_value, 300.0);

    let unit = state.find_for_stock_out("222").await.unwrap();
    let sold = state
        .stock_out(
            &unit.id,
            SaleDetails {
                sell_price: "260".into(),
                discount: Some("10".into()),
                customer_name: "Meera".into(),
                payment_mode: PaymentMode::Card,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(sold.details.sell_price.as_deref(), Some("250"));
    assert!(sold.details.sale_date.is_some());

    let snapshot = state.snapshot();
    let wire = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(wire["statistics"]["outOfStock"], 1);
    assert_eq!(wire["devices"][1]["deviceStatus"], "StockOut");
    assert_eq!(snapshot.statistics.in_stock, 1);
    assert_eq!(snapshot.statistics.out_of_stock, 1);
    assert!(!snapshot.loading);

    let err = state.find_for_stock_out("222").await.unwrap_err();
    assert!(matches!(err, InventoryError::AlreadySold(_)));
}

#[tokio::test]
async fn search_is_case_insensitive_across_fields() {
    let state = state_over(Arc::new(InMemoryKeyValueStore::new()));
    state.add_device(phone("356938035643809", "iPhone 14", "1")).await.unwrap();
    state.add_device(phone("490154203237518", "Pixel 8", "1")).await.unwrap();

    let hits = state.search_devices("IPHONE").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].display_name(), "iPhone 14");

    assert_eq!(state.search_devices("14").await.unwrap().len(), 1);
    assert_eq!(state.search_devices("4901").await.unwrap().len(), 1);
    assert_eq!(state.search_devices("").await.unwrap().len(), 2);
}

#[tokio::test]
async fn update_and_delete_round_trip() {
    let state = state_over(Arc::new(InMemoryKeyValueStore::new()));
    let device = state.add_device(phone("333", "Moto G", "90")).await.unwrap();

    let updated = state
        .update_device(
            &device.id,
            DevicePatch {
                model_name: Some("Moto G Power".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, device.id);
    assert_eq!(updated.created_at, device.created_at);
    assert!(updated.updated_at >= device.updated_at);

    let fetched = state.get_device_by_id(&device.id).await.unwrap().unwrap();
    assert_eq!(fetched.display_name(), "Moto G Power");

    state.delete_device(&device.id).await.unwrap();
    state.delete_device(&device.id).await.unwrap();
    assert!(state.snapshot().devices.is_empty());

    let err = state
        .update_device(&DeviceId::from("gone"), DevicePatch::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn update_with_clashing_extra_keeps_collection_readable() {
    init_tracing();
    let state = state_over(Arc::new(InMemoryKeyValueStore::new()));
    let device = state.add_device(phone("555", "Redmi 12", "80")).await.unwrap();

    let updated = state
        .update_device(
            &device.id,
            DevicePatch {
                extra: [
                    ("box".to_string(), serde_json::json!("yes")),
                    ("deviceStatus".to_string(), serde_json::json!("Lost")),
                    ("warranty".to_string(), serde_json::json!("6 months")),
                ]
                .into_iter()
                .collect(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!updated.details.accessories.has_box);

    state.refresh_data().await.unwrap();
    state.add_device(phone("556", "Redmi 13", "90")).await.unwrap();

    let snapshot = state.snapshot();
    assert_eq!(snapshot.devices.len(), 2);
    assert_eq!(snapshot.devices[0].status(), Some(DeviceStatus::StockIn));
    assert_eq!(snapshot.devices[0].details.extra["warranty"], "6 months");
}

#[tokio::test]
async fn sale_replaces_registration_contact_details() {
    let state = state_over(Arc::new(InMemoryKeyValueStore::new()));
    let mut draft = phone("777", "OnePlus 11", "300");
    draft.details.customer = CustomerDetails {
        name: Some("Seller".into()),
        contact: Some("111-seller".into()),
        email: Some("seller@example.com".into()),
        ..Default::default()
    };
    let device = state.add_device(draft).await.unwrap();

    let sold = state
        .stock_out(
            &device.id,
            SaleDetails {
                sell_price: "350".into(),
                customer_name: "Buyer".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(sold.details.customer.name.as_deref(), Some("Buyer"));
    assert_eq!(sold.details.customer.contact.as_deref(), Some(""));
    assert_eq!(sold.details.customer.email.as_deref(), Some(""));
}

#[tokio::test]
async fn session_survives_restart_and_logout_clears_it() {
    let store = Arc::new(InMemoryKeyValueStore::new());

    let first = state_over(store.clone());
    first.login(UserRole::Manager).await.unwrap();
    assert!(first.auth().is_manager());

    let second = state_over(store.clone());
    second.initialize().await.unwrap();
    assert!(second.auth().is_authenticated);

    second.logout().await.unwrap();
    assert!(!second.auth().is_authenticated);
    assert_eq!(store.get(AUTH_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn reset_wipes_inventory_but_keeps_login() {
    let state = state_over(Arc::new(InMemoryKeyValueStore::new()));
    state.login(UserRole::TeamMember).await.unwrap();
    state.add_device(phone("444", "Nokia 3310", "20")).await.unwrap();
    state
        .add_inventory_item(InventoryItemDraft::named("USB-C cable"))
        .await
        .unwrap();
    assert_eq!(state.stock_lines(StockLineFilter::All).len(), 2);

    state.reset_data().await.unwrap();

    let snapshot = state.snapshot();
    assert!(snapshot.devices.is_empty());
    assert!(snapshot.inventory.is_empty());
    assert_eq!(snapshot.statistics.total_devices, 0);
    assert!(state.restore_session().await.unwrap().is_authenticated);
}

#[tokio::test]
async fn legacy_records_are_counted_after_refresh() {
    init_tracing();
    let store = Arc::new(InMemoryKeyValueStore::with_entries([(
        DEVICES_KEY,
        r#"[
            {"id":"1","status":"In Stock","purchasePrice":"100"},
            {"id":"2","status":"Out of Stock","sellPrice":"250"},
            {"id":"3","status":"Low Stock","purchasePrice":"abc"}
        ]"#,
    )]));
    let state = state_over(store);

    state.refresh_data().await.unwrap();
    let stats = state.compute_statistics().await.unwrap();

    assert_eq!(stats, state.statistics());
    assert_eq!(stats.total_devices, 3);
    assert_eq!(stats.in_stock, 1);
    assert_eq!(stats.out_of_stock, 1);
    assert_eq!(stats.low_stock, 1);
    assert_eq!(stats.total_value, 350.0);
    assert_eq!(
        state.snapshot().devices[0].status(),
        Some(DeviceStatus::StockIn)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_registrations_are_all_kept() {
    let state = Arc::new(state_over(Arc::new(InMemoryKeyValueStore::new())));

    let a = {
        let state = state.clone();
        tokio::spawn(async move { state.add_device(phone("A-1", "Device A", "10")).await })
    };
    let b = {
        let state = state.clone();
        tokio::spawn(async move { state.add_device(phone("B-1", "Device B", "20")).await })
    };
    a.await.unwrap().unwrap();
    b.await.unwrap().unwrap();

    state.refresh_data().await.unwrap();
    let mut ids: Vec<String> = state
        .snapshot()
        .devices
        .into_iter()
        .map(|d| d.id.into_inner())
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["A-1", "B-1"]);
}
