//! Persistence backends for items and trip history.
//!
//! The rest of the crate talks to storage only through the [`Store`] trait,
//! which combines an [`ItemStore`] with a [`HistoryLog`]. Two backends ship
//! with the crate:
//!
//! - [`SqliteStore`]: an embedded SQLite database, used for guest sessions
//! - [`RemoteStore`]: a PostgREST-style REST endpoint, used once a session
//!   is authenticated
//!
//! The backend is chosen once, when a [`crate::Grocer`] is built, from the
//! [`Session`]. Backend-specific failures are reported as
//! [`GroceryError::StoreUnavailable`] at the trait boundary.

use async_trait::async_trait;
use log::{debug, warn};

use crate::{
    error::{GroceryError, ResetFailure, Result, StoreResultExt},
    models::{Item, ItemId, Trip},
    shopping::StatusReset,
};

pub mod remote;
pub mod sqlite;

pub use remote::{RemoteEndpoint, RemoteStore};
pub use sqlite::SqliteStore;

/// Which kind of backend a store is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Embedded database on this machine
    Local,
    /// Remote synced service
    Remote,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Local => write!(f, "local"),
            Backend::Remote => write!(f, "remote"),
        }
    }
}

/// Authentication state that decides which backend a session uses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// Unauthenticated, data stays on this machine
    #[default]
    Guest,
    /// Signed in to the remote service
    Authenticated { access_token: String },
}

/// CRUD over the item inventory.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Inserts a new item.
    async fn add_item(&self, item: &Item) -> Result<()>;

    /// Replaces the stored item with the same id.
    ///
    /// Returns [`GroceryError::ItemNotFound`] if no such item exists.
    async fn update_item(&self, item: &Item) -> Result<()>;

    /// Permanently removes an item.
    async fn delete_item(&self, id: &ItemId) -> Result<()>;

    /// Every stored item.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// A single item by exact id, or `None` if it does not exist.
    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>> {
        Ok(self.list_items().await?.into_iter().find(|i| &i.id == id))
    }
}

/// Append-only log of completed trips.
#[async_trait]
pub trait HistoryLog: Send + Sync {
    async fn append_trip(&self, trip: &Trip) -> Result<()>;

    /// All trips, most recent first.
    async fn list_trips(&self) -> Result<Vec<Trip>>;

    /// Removes every trip. Irreversible.
    async fn clear_trips(&self) -> Result<()>;
}

/// A complete persistence backend.
#[async_trait]
pub trait Store: ItemStore + HistoryLog {
    fn backend(&self) -> Backend;

    /// Records a finished trip and writes the status resets it implies.
    ///
    /// The default implementation appends the trip first. If that fails
    /// nothing is reset and the error is returned. Each reset is then
    /// attempted independently; any that fail are collected into
    /// [`GroceryError::PartialTrip`] so the caller can retry them.
    async fn commit_trip(&self, trip: &Trip, resets: &[StatusReset]) -> Result<()> {
        self.append_trip(trip)
            .await
            .store_context("append trip", Some(trip.id.as_str()))?;

        let mut failures = Vec::new();
        for reset in resets {
            let item = &reset.item;
            debug!("Resetting {} to {}", item.id, item.status.as_str());
            if let Err(e) = self.update_item(item).await {
                warn!("Failed to reset item {} after trip {}: {e}", item.id, trip.id);
                failures.push(ResetFailure {
                    item: item.clone(),
                    from: reset.from,
                    reason: e.to_string(),
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(GroceryError::PartialTrip {
                trip_id: trip.id.clone(),
                failures,
            })
        }
    }
}
