//! High-level API for managing the inventory and running shopping trips.
//!
//! [`Grocer`] is the single entry point the application layers use. It owns
//! the store chosen at build time and implements the trip lifecycle on top of
//! it:
//!
//! ```text
//!   manage list ──begin_trip──▶ ShoppingSession ──finish──▶ trip archived
//!        ▲                          │    │                       │
//!        │                          │  exit                      │
//!        └──────────────────────────┴────┴───────────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory choosing the backend from the session
//! - [`item_ops`]: Inventory editing and list membership
//! - [`trip_ops`]: The shopping session and checkout
//! - [`history_ops`]: Trip history, reset retries and data import
//!
//! A [`ShoppingSession`] mutably borrows its `Grocer`, so list membership
//! cannot change while a trip is in progress.
//!
//! # Usage
//!
//! ```rust
//! use grocer_core::{
//!     GrocerBuilder,
//!     params::{CreateItem, FinishTrip, Id},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut grocer = GrocerBuilder::new()
//!     .with_database_path(Some("/tmp/grocer-example.db"))
//!     .build()
//!     .await?;
//!
//! let milk = grocer
//!     .add_item(CreateItem {
//!         name: "Milk".to_string(),
//!         aisle: Some("4".to_string()),
//!         needed: true,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let mut trip = grocer.begin_trip().await?;
//! trip.pick_up(&Id::new(milk.id.as_str())).await?;
//! let outcome = trip.finish(FinishTrip { confirmed: true }).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{
    models::MissedItemPolicy,
    store::{Backend, Store},
};

pub mod builder;
pub mod history_ops;
pub mod item_ops;
pub mod trip_ops;


pub use builder::GrocerBuilder;
pub use history_ops::ImportReport;
pub use trip_ops::{FinishOutcome, ShoppingSession};

/// Main interface over one store.
pub struct Grocer {
    pub(crate) store: Arc<dyn Store>,
    pub(crate) missed_policy: MissedItemPolicy,
}

impl Grocer {
    pub(crate) fn new(store: Arc<dyn Store>, missed_policy: MissedItemPolicy) -> Self {
        Self {
            store,
            missed_policy,
        }
    }

    /// Which backend this instance persists to.
    pub fn backend(&self) -> Backend {
        self.store.backend()
    }

    /// Policy applied to missed items when a trip finishes.
    pub fn missed_policy(&self) -> MissedItemPolicy {
        self.missed_policy
    }

    /// The underlying store, e.g. as the source of an import.
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}
