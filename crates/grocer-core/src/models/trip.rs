//! Trip (history record) model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Category, Item, TripId};

/// Point-in-time copy of the parts of an item a trip remembers.
///
/// Snapshots own their data, so later edits or deletes of the source item
/// never reach a recorded trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemSnapshot {
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub aisle: Option<String>,
}

impl From<&Item> for ItemSnapshot {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category,
            aisle: item.aisle.clone(),
        }
    }
}

/// One completed shopping trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier, generated at completion
    pub id: TripId,

    /// Completion time (UTC, millisecond precision); the sole ordering key
    pub date: Timestamp,

    /// Items that were in the cart, in aisle order
    #[serde(default)]
    pub purchased: Vec<ItemSnapshot>,

    /// Items left on the list, in aisle order
    #[serde(default)]
    pub missed: Vec<ItemSnapshot>,
}

impl Trip {
    /// Truncates a timestamp to the millisecond precision trips are stored
    /// with.
    pub fn truncate_date(date: Timestamp) -> Timestamp {
        Timestamp::from_millisecond(date.as_millisecond()).unwrap_or(date)
    }

    /// Whether the trip has nothing to record.
    pub fn is_empty(&self) -> bool {
        self.purchased.is_empty() && self.missed.is_empty()
    }
}

/// Counts for a trip, used in compact listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripSummary {
    pub purchased: usize,
    pub missed: usize,
}

impl From<&Trip> for TripSummary {
    fn from(trip: &Trip) -> Self {
        Self {
            purchased: trip.purchased.len(),
            missed: trip.missed.len(),
        }
    }
}
