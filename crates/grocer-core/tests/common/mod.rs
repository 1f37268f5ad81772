#![allow(dead_code)]

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use grocer_core::{
    store::{HistoryLog, ItemStore},
    Backend, Grocer, GrocerBuilder, GroceryError, Item, ItemId, Result, Store, Trip,
};
use tempfile::TempDir;

/// Helper function to create a test grocer on a fresh SQLite file
pub async fn create_test_grocer() -> (TempDir, Grocer) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let grocer = GrocerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create grocer");
    (temp_dir, grocer)
}

/// Which calls a [`FlakyStore`] should fail.
#[derive(Debug, Default)]
struct Faults {
    append_trip: bool,
    list_items: bool,
    all_updates: bool,
    updates_for: HashSet<ItemId>,
}

/// In-memory store with switchable failures, using the default
/// (non-transactional) trip commit.
#[derive(Default)]
pub struct FlakyStore {
    items: Mutex<Vec<Item>>,
    trips: Mutex<Vec<Trip>>,
    faults: Mutex<Faults>,
    update_calls: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_append_trip(&self, fail: bool) {
        self.faults.lock().unwrap().append_trip = fail;
    }

    pub fn fail_list_items(&self, fail: bool) {
        self.faults.lock().unwrap().list_items = fail;
    }

    pub fn fail_all_updates(&self, fail: bool) {
        self.faults.lock().unwrap().all_updates = fail;
    }

    pub fn fail_updates_for(&self, id: &ItemId) {
        self.faults.lock().unwrap().updates_for.insert(id.clone());
    }

    pub fn heal(&self) {
        *self.faults.lock().unwrap() = Faults::default();
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn trips(&self) -> Vec<Trip> {
        self.trips.lock().unwrap().clone()
    }

    pub fn item(&self, id: &ItemId) -> Option<Item> {
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|i| &i.id == id)
            .cloned()
    }
}

fn offline(operation: &'static str, target: Option<&str>) -> GroceryError {
    GroceryError::unavailable(operation, target, "simulated outage")
}

#[async_trait]
impl ItemStore for FlakyStore {
    async fn add_item(&self, item: &Item) -> Result<()> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        {
            let faults = self.faults.lock().unwrap();
            if faults.all_updates || faults.updates_for.contains(&item.id) {
                return Err(offline("update item", Some(item.id.as_str())));
            }
        }

        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => {
                *slot = item.clone();
                Ok(())
            }
            None => Err(GroceryError::ItemNotFound {
                id: item.id.to_string(),
            }),
        }
    }

    async fn delete_item(&self, id: &ItemId) -> Result<()> {
        self.items.lock().unwrap().retain(|i| &i.id != id);
        Ok(())
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        if self.faults.lock().unwrap().list_items {
            return Err(offline("list items", None));
        }
        Ok(self.items.lock().unwrap().clone())
    }
}

#[async_trait]
impl HistoryLog for FlakyStore {
    async fn append_trip(&self, trip: &Trip) -> Result<()> {
        if self.faults.lock().unwrap().append_trip {
            return Err(offline("append trip", Some(trip.id.as_str())));
        }
        self.trips.lock().unwrap().push(trip.clone());
        Ok(())
    }

    async fn list_trips(&self) -> Result<Vec<Trip>> {
        let mut trips = self.trips.lock().unwrap().clone();
        trips.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(trips)
    }

    async fn clear_trips(&self) -> Result<()> {
        self.trips.lock().unwrap().clear();
        Ok(())
    }
}

#[async_trait]
impl Store for FlakyStore {
    fn backend(&self) -> Backend {
        Backend::Remote
    }
}

/// A grocer on top of a shared [`FlakyStore`].
pub async fn create_flaky_grocer() -> (Arc<FlakyStore>, Grocer) {
    let store = FlakyStore::new();
    let grocer = GrocerBuilder::new()
        .with_store(store.clone())
        .build()
        .await
        .expect("Failed to create grocer");
    (store, grocer)
}
