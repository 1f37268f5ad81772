//! Core library for the Grocer grocery tracker.
//!
//! This crate holds the business logic: the item status state machine, the
//! trip lifecycle (list, shop, check out, archive), the aisle ordering used
//! while shopping, and the stores that persist it all either in an embedded
//! SQLite file or on a remote synced service.
//!
//! # Layout
//!
//! - [`models`]: items, trips and the status state machine
//! - [`sorting`]: natural aisle ordering
//! - [`shopping`]: pure derivations (active list, progress, checkout plan)
//! - [`store`]: the storage traits and both backends
//! - [`grocer`]: the high-level API and the shopping session
//! - [`display`]: markdown formatting for terminal output
//! - [`config`]: layered configuration
//!
//! # Quick Start
//!
//! ```rust
//! use grocer_core::{GrocerBuilder, params::{CreateItem, ListItems}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut grocer = GrocerBuilder::new()
//!     .with_database_path(Some("groceries.db"))
//!     .build()
//!     .await?;
//!
//! let item = grocer
//!     .add_item(CreateItem {
//!         name: "Oat milk".to_string(),
//!         category: Some("drinks".to_string()),
//!         needed: true,
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{item}");
//!
//! let inventory = grocer.list_items(&ListItems::default()).await?;
//! print!("{inventory}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod grocer;
pub mod models;
pub mod params;
pub mod shopping;
pub mod sorting;
pub mod store;

// Re-export commonly used types
pub use config::GrocerConfig;
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Items, OperationStatus, ShoppingList, Trips, UpdateResult,
};
pub use error::{GroceryError, ResetFailure, Result};
pub use grocer::{FinishOutcome, Grocer, GrocerBuilder, ImportReport, ShoppingSession};
pub use models::{Category, Item, ItemId, ItemStatus, MissedItemPolicy, Trip, TripId};
pub use params::{ClearHistory, CreateItem, FinishTrip, Id, ListItems, UpdateItem};
pub use shopping::{Checkout, StatusReset};
pub use store::{Backend, Session, SqliteStore, Store};
