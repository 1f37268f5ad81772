//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update, delete and checkout operations with consistent messaging.

use std::fmt;

use crate::{
    grocer::{FinishOutcome, ImportReport},
    models::Item,
};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use grocer_core::{
///     display::CreateResult,
///     models::{Category, Item, ItemStatus},
/// };
///
/// let item = Item {
///     id: "itm-1".into(),
///     name: "Coffee".to_string(),
///     category: Category::Drinks,
///     aisle: Some("7".to_string()),
///     status: ItemStatus::Needed,
///     price: None,
///     quantity: None,
///     is_essential: false,
/// };
///
/// let output = CreateResult::new(item).to_string();
/// assert!(output.contains("Added 'Coffee' with ID: itm-1"));
/// ```
#[derive(Debug)]
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added '{}' with ID: {}",
            self.resource.name, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can track and display specific changes made during the update.
#[derive(Debug)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated item with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
#[derive(Debug)]
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted item '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for FinishOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishOutcome::NothingToRecord => {
                writeln!(f, "Nothing was on the list; no trip recorded.")
            }
            FinishOutcome::Recorded(trip) => {
                writeln!(f, "Trip recorded with ID: {}", trip.id)?;
                writeln!(f)?;
                write!(f, "{trip}")
            }
        }
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} item(s) and {} trip(s).",
            self.items_imported, self.trips_imported
        )?;
        if self.items_skipped > 0 || self.trips_skipped > 0 {
            writeln!(
                f,
                "Skipped {} item(s) and {} trip(s) already present.",
                self.items_skipped, self.trips_skipped
            )?;
        }
        Ok(())
    }
}
