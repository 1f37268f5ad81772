//! Display formatting and result types.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes get newtype wrappers so each context can choose how
//! to present them. All output is markdown, which the CLI renders with
//! `termimad`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Markdown      │
//! │  (Item, Trip)   │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (Items, Trips, ShoppingList)
//! - [`results`]: Operation results (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use grocer_core::display::OperationStatus;
//!
//! let cleared = OperationStatus::success("Shopping history cleared");
//! assert!(cleared.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Items, ShoppingList, Trips};
pub use datetime::{LocalDate, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
