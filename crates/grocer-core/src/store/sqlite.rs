//! Embedded-local backend on top of [`Database`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::task;

use super::{Backend, HistoryLog, ItemStore, Store};
use crate::{
    db::Database,
    error::{GroceryError, Result, StoreResultExt},
    models::{Item, ItemId, Trip},
    shopping::StatusReset,
};

/// Store backed by a SQLite file.
///
/// Each call opens the database on a blocking thread, so the store itself is
/// just a path and is cheap to clone.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens (and if needed creates) the database at `path`.
    ///
    /// Parent directories are created and the schema is initialized before
    /// returning.
    ///
    /// # Errors
    ///
    /// Returns `GroceryError::FileSystem` if the parent directory cannot be
    /// created, or `GroceryError::Database` if initialization fails.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| GroceryError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), GroceryError>(())
        })
        .await
        .map_err(|e| GroceryError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Self { db_path })
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    async fn with_db<T, F>(
        &self,
        operation: &'static str,
        target: Option<String>,
        f: F,
    ) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        debug!("sqlite: {operation}");
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(|e| GroceryError::Configuration {
            message: format!("Task join error: {e}"),
        })
        .and_then(|result| result)
        .store_context(operation, target.as_deref())
    }
}

#[async_trait]
impl ItemStore for SqliteStore {
    async fn add_item(&self, item: &Item) -> Result<()> {
        let item = item.clone();
        self.with_db("add item", Some(item.id.to_string()), move |db| {
            db.add_item(&item)
        })
        .await
    }

    async fn update_item(&self, item: &Item) -> Result<()> {
        let item = item.clone();
        self.with_db("update item", Some(item.id.to_string()), move |db| {
            db.update_item(&item)
        })
        .await
    }

    async fn delete_item(&self, id: &ItemId) -> Result<()> {
        let id = id.clone();
        self.with_db("delete item", Some(id.to_string()), move |db| {
            db.delete_item(&id)
        })
        .await
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        self.with_db("list items", None, |db| db.list_items()).await
    }

    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>> {
        let id = id.clone();
        self.with_db("get item", Some(id.to_string()), move |db| db.get_item(&id))
            .await
    }
}

#[async_trait]
impl HistoryLog for SqliteStore {
    async fn append_trip(&self, trip: &Trip) -> Result<()> {
        let trip = trip.clone();
        self.with_db("append trip", Some(trip.id.to_string()), move |db| {
            db.append_trip(&trip)
        })
        .await
    }

    async fn list_trips(&self) -> Result<Vec<Trip>> {
        self.with_db("list trips", None, |db| db.list_trips()).await
    }

    async fn clear_trips(&self) -> Result<()> {
        self.with_db("clear trips", None, |db| db.clear_trips().map(|_| ()))
            .await
    }
}

#[async_trait]
impl Store for SqliteStore {
    fn backend(&self) -> Backend {
        Backend::Local
    }

    /// Writes the trip and every reset in a single transaction.
    async fn commit_trip(&self, trip: &Trip, resets: &[StatusReset]) -> Result<()> {
        let trip = trip.clone();
        let resets = resets.to_vec();
        self.with_db("commit trip", Some(trip.id.to_string()), move |db| {
            db.record_trip(&trip, &resets)
        })
        .await
    }
}
