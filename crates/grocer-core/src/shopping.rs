//! Pure derivations over the item collection.
//!
//! Everything the trip lifecycle shows or records is computed here from a
//! plain slice of items: the active subset, the aisle-ordered shopping list,
//! progress through the cart, and the checkout plan applied when a trip is
//! finished. None of these functions touch a store.

use jiff::Timestamp;

use crate::{
    error::Result,
    models::{Item, ItemSnapshot, ItemStatus, MissedItemPolicy, Mode, StatusEvent, Trip, TripId},
    sorting::sort_by_aisle,
};

/// Number of items shown in the list preview before summarising the rest.
pub const PREVIEW_LIMIT: usize = 5;

/// Items on the active list (needed or in the cart), in input order.
pub fn active_subset(items: &[Item]) -> Vec<Item> {
    items.iter().filter(|i| i.is_on_list()).cloned().collect()
}

/// The active subset ordered by aisle, as walked during a trip.
pub fn shopping_list(items: &[Item]) -> Vec<Item> {
    let mut active = active_subset(items);
    sort_by_aisle(&mut active);
    active
}

/// How far through the cart the current trip is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Items in the cart
    pub in_cart: usize,
    /// Items on the active list
    pub total: usize,
}

impl Progress {
    /// Progress over the active subset of `items`.
    pub fn of(items: &[Item]) -> Self {
        items
            .iter()
            .filter(|i| i.is_on_list())
            .fold(Self::default(), |mut acc, item| {
                acc.total += 1;
                if item.status == ItemStatus::InCart {
                    acc.in_cart += 1;
                }
                acc
            })
    }

    /// Fraction of the active list in the cart; `0.0` for an empty list.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.in_cart as f64 / self.total as f64
        }
    }

    /// Whether every item on the list is in the cart.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.in_cart == self.total
    }
}

/// A status change written when a trip finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReset {
    /// The item already carrying its new status
    pub item: Item,
    /// Status the item had when the trip finished
    pub from: ItemStatus,
}

/// What finishing a trip will write.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkout {
    /// The trip record, absent when nothing was on the list
    pub trip: Option<Trip>,
    /// Items whose status changes
    pub resets: Vec<StatusReset>,
}

impl Checkout {
    /// Plans the end of a trip over the full item collection.
    ///
    /// The active subset is split into purchased (in the cart) and missed
    /// (still needed) snapshots in aisle order, and every item is run through
    /// the bulk finish event under `policy`.
    pub fn plan(items: &[Item], policy: MissedItemPolicy, now: Timestamp) -> Result<Self> {
        let list = shopping_list(items);

        let (purchased, missed): (Vec<&Item>, Vec<&Item>) = list
            .iter()
            .partition(|item| item.status == ItemStatus::InCart);

        if purchased.is_empty() && missed.is_empty() {
            return Ok(Self {
                trip: None,
                resets: Vec::new(),
            });
        }

        let trip = Trip {
            id: TripId::generate(),
            date: Trip::truncate_date(now),
            purchased: purchased.into_iter().map(ItemSnapshot::from).collect(),
            missed: missed.into_iter().map(ItemSnapshot::from).collect(),
        };

        let event = StatusEvent::FinishTrip(policy);
        let mut resets = Vec::new();
        for item in &list {
            let next = item.status.apply(event, Mode::Shopping)?;
            if next != item.status {
                resets.push(StatusReset {
                    item: item.with_status(next),
                    from: item.status,
                });
            }
        }

        Ok(Self {
            trip: Some(trip),
            resets,
        })
    }
}

/// The overview shown before a trip: how many items are on the list and the
/// first few of them.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPreview {
    pub total: usize,
    pub items: Vec<Item>,
}

impl ListPreview {
    /// Builds the preview from the full item collection.
    pub fn of(items: &[Item]) -> Self {
        let active = active_subset(items);
        Self {
            total: active.len(),
            items: active.into_iter().take(PREVIEW_LIMIT).collect(),
        }
    }

    /// Items on the list beyond the preview.
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.items.len())
    }

    /// Whether a trip can be started.
    pub fn can_shop(&self) -> bool {
        self.total > 0
    }
}
