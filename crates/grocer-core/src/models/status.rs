//! Item status enumeration and the shopping state machine.
//!
//! An item cycles through three states across shopping trips:
//!
//! ```text
//!               add to list              pick up
//!  not_needed ───────────────▶ needed ───────────────▶ in_cart
//!      ▲      ◀───────────────        ◀───────────────    │
//!      │       remove from list           put back        │
//!      └──────────────────────────────────────────────────┘
//!                         trip finished
//! ```
//!
//! List membership events are only valid while managing the inventory; cart
//! events are only valid during a trip. There is no single event that moves
//! an item from `not_needed` straight into the cart.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{GroceryError, Result};

/// Type-safe enumeration of item statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Item is in the inventory but not on the shopping list
    #[default]
    NotNeeded,

    /// Item is on the shopping list
    Needed,

    /// Item has been picked up during the current trip
    InCart,
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_needed" | "notneeded" => Ok(ItemStatus::NotNeeded),
            "needed" => Ok(ItemStatus::Needed),
            "in_cart" | "incart" => Ok(ItemStatus::InCart),
            _ => Err(format!("Invalid item status: {s}")),
        }
    }
}

impl ItemStatus {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::NotNeeded => "not_needed",
            ItemStatus::Needed => "needed",
            ItemStatus::InCart => "in_cart",
        }
    }

    /// Whether an item with this status is on the active list.
    pub fn is_on_list(&self) -> bool {
        matches!(self, ItemStatus::Needed | ItemStatus::InCart)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grocer_core::models::ItemStatus;
    ///
    /// assert_eq!(ItemStatus::InCart.with_icon(), "✓ In Cart");
    /// assert_eq!(ItemStatus::Needed.with_icon(), "○ Needed");
    /// assert_eq!(ItemStatus::NotNeeded.with_icon(), "· Not Needed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ItemStatus::InCart => "✓ In Cart",
            ItemStatus::Needed => "○ Needed",
            ItemStatus::NotNeeded => "· Not Needed",
        }
    }

    /// Apply a status event in the given mode.
    ///
    /// Returns the resulting status. Events that already hold (adding an item
    /// that is on the list, picking up an item already in the cart) return
    /// the current status unchanged.
    ///
    /// # Errors
    ///
    /// Returns `GroceryError::Validation` when the event is not allowed in
    /// `mode`, or when a cart event targets an item that is not on the list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grocer_core::models::{ItemStatus, Mode, StatusEvent};
    ///
    /// let status = ItemStatus::NotNeeded.apply(StatusEvent::AddToList, Mode::Managing)?;
    /// assert_eq!(status, ItemStatus::Needed);
    ///
    /// // Items must be on the list before they can go in the cart
    /// assert!(ItemStatus::NotNeeded
    ///     .apply(StatusEvent::PickUp, Mode::Shopping)
    ///     .is_err());
    /// # Ok::<(), grocer_core::GroceryError>(())
    /// ```
    pub fn apply(self, event: StatusEvent, mode: Mode) -> Result<ItemStatus> {
        if event.mode() != mode {
            return Err(GroceryError::validation("status").with_reason(format!(
                "'{event}' is only allowed while {}, not while {mode}",
                event.mode()
            )));
        }

        use ItemStatus::*;
        let next = match (event, self) {
            (StatusEvent::AddToList, NotNeeded) => Needed,
            (StatusEvent::AddToList, current) => current,
            (StatusEvent::RemoveFromList, _) => NotNeeded,

            (StatusEvent::PickUp | StatusEvent::PutBack | StatusEvent::Toggle, NotNeeded) => {
                return Err(GroceryError::validation("status").with_reason(format!(
                    "Cannot '{event}' an item that is not on the shopping list"
                )));
            }
            (StatusEvent::PickUp, _) => InCart,
            (StatusEvent::PutBack, _) => Needed,
            (StatusEvent::Toggle, Needed) => InCart,
            (StatusEvent::Toggle, InCart) => Needed,

            (StatusEvent::FinishTrip(_), InCart) => NotNeeded,
            (StatusEvent::FinishTrip(MissedItemPolicy::Reset), Needed) => NotNeeded,
            (StatusEvent::FinishTrip(MissedItemPolicy::Carry), Needed) => Needed,
            (StatusEvent::FinishTrip(_), NotNeeded) => NotNeeded,
        };
        Ok(next)
    }
}

/// Whether the user is managing the inventory or walking a shopping trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Managing,
    Shopping,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Managing => write!(f, "managing the list"),
            Mode::Shopping => write!(f, "shopping"),
        }
    }
}

/// What happens to items left on the list (never picked up) when a trip
/// finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissedItemPolicy {
    /// Missed items stay needed and carry over to the next trip
    #[default]
    Carry,
    /// Missed items are taken off the list as well
    Reset,
}

impl FromStr for MissedItemPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "carry" => Ok(MissedItemPolicy::Carry),
            "reset" => Ok(MissedItemPolicy::Reset),
            _ => Err(format!("Invalid missed item policy: {s}")),
        }
    }
}

impl fmt::Display for MissedItemPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissedItemPolicy::Carry => write!(f, "carry"),
            MissedItemPolicy::Reset => write!(f, "reset"),
        }
    }
}

/// Events that move an item between statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    /// Put the item on the shopping list
    AddToList,
    /// Take the item off the shopping list
    RemoveFromList,
    /// Check the item into the cart
    PickUp,
    /// Take the item back out of the cart
    PutBack,
    /// Flip between needed and in cart
    Toggle,
    /// Bulk reset applied when a trip is completed
    FinishTrip(MissedItemPolicy),
}

impl StatusEvent {
    /// The mode in which this event may be applied.
    pub fn mode(&self) -> Mode {
        match self {
            StatusEvent::AddToList | StatusEvent::RemoveFromList => Mode::Managing,
            StatusEvent::PickUp
            | StatusEvent::PutBack
            | StatusEvent::Toggle
            | StatusEvent::FinishTrip(_) => Mode::Shopping,
        }
    }
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusEvent::AddToList => write!(f, "add to list"),
            StatusEvent::RemoveFromList => write!(f, "remove from list"),
            StatusEvent::PickUp => write!(f, "pick up"),
            StatusEvent::PutBack => write!(f, "put back"),
            StatusEvent::Toggle => write!(f, "toggle"),
            StatusEvent::FinishTrip(_) => write!(f, "finish trip"),
        }
    }
}
