//! Data models for items and trips.
//!
//! This module contains the core domain models of the grocery tracker.
//! Display implementations for these models are located in
//! [`crate::display::models`] to keep data and presentation apart.
//!
//! - [`Item`]: an inventory entry with its position in the shopping state
//!   machine ([`ItemStatus`])
//! - [`Trip`]: a completed shopping trip holding [`ItemSnapshot`] copies of
//!   what was purchased and missed
//!
//! # Examples
//!
//! ```rust
//! use grocer_core::models::{Category, Item, ItemStatus};
//!
//! let item = Item {
//!     id: "itm-1".into(),
//!     name: "Milk".to_string(),
//!     category: Category::Drinks,
//!     aisle: Some("4".to_string()),
//!     status: ItemStatus::Needed,
//! #   price: None,
//! #   quantity: None,
//! #   is_essential: false,
//! };
//! assert!(item.is_on_list());
//! println!("{}", item); // Shows ○ Needed status icon
//! ```

pub mod id;
pub mod item;
pub mod status;
pub mod trip;

#[cfg(test)]
mod tests;

pub use id::{ItemId, TripId};
pub use item::{normalize_aisle, Category, Item};
pub use status::{ItemStatus, MissedItemPolicy, Mode, StatusEvent};
pub use trip::{ItemSnapshot, Trip, TripSummary};
