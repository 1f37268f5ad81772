//! The shopping session: walking the list and checking out.

use jiff::Timestamp;
use log::{debug, info};

use super::{item_ops::resolve_in, Grocer};
use crate::{
    error::{GroceryError, Result},
    models::{Item, Mode, StatusEvent, Trip},
    params::{FinishTrip, Id},
    shopping::{shopping_list, Checkout, Progress},
};

/// Result of finishing a trip.
#[derive(Debug, Clone, PartialEq)]
pub enum FinishOutcome {
    /// The list was empty by the time the trip finished; nothing was written
    NothingToRecord,
    /// The trip was archived and cart items were reset
    Recorded(Trip),
}

/// An active shopping trip.
///
/// Holds the aisle-sorted active subset loaded when the trip began and keeps
/// it in step with every cart change it writes. While the session exists its
/// [`Grocer`] is borrowed, so items cannot be added to or removed from the
/// list.
pub struct ShoppingSession<'a> {
    grocer: &'a mut Grocer,
    items: Vec<Item>,
}

impl Grocer {
    /// Enters shopping mode.
    ///
    /// # Errors
    ///
    /// * `GroceryError::Validation` - When nothing is on the list
    pub async fn begin_trip(&mut self) -> Result<ShoppingSession<'_>> {
        let items = shopping_list(&self.store.list_items().await?);
        if items.is_empty() {
            return Err(GroceryError::validation("list")
                .with_reason("Add items to the list before starting a trip"));
        }

        debug!("Beginning trip over {} item(s)", items.len());
        Ok(ShoppingSession {
            grocer: self,
            items,
        })
    }
}

impl ShoppingSession<'_> {
    /// The active subset in aisle order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.items)
    }

    /// Flips an item between needed and in the cart.
    pub async fn toggle(&mut self, params: &Id) -> Result<Item> {
        self.apply(params, StatusEvent::Toggle).await
    }

    /// Checks an item into the cart.
    pub async fn pick_up(&mut self, params: &Id) -> Result<Item> {
        self.apply(params, StatusEvent::PickUp).await
    }

    /// Takes an item back out of the cart.
    pub async fn put_back(&mut self, params: &Id) -> Result<Item> {
        self.apply(params, StatusEvent::PutBack).await
    }

    /// Leaves shopping mode without recording anything.
    pub fn exit(self) {
        debug!("Left shopping mode");
    }

    /// Completes the trip.
    ///
    /// Items are re-read from the store so the record reflects what was
    /// actually persisted. The session ends whether or not this succeeds.
    ///
    /// Without confirmation nothing is written; cart state is already stored,
    /// so beginning a new trip resumes exactly where this one stopped.
    ///
    /// # Errors
    ///
    /// * `GroceryError::Validation` - When `params.confirmed` is false
    /// * `GroceryError::StoreUnavailable` - When the trip could not be recorded
    /// * `GroceryError::PartialTrip` - When the trip was recorded but some
    ///   items could not be reset
    pub async fn finish(self, params: FinishTrip) -> Result<FinishOutcome> {
        if !params.confirmed {
            return Err(GroceryError::validation("confirmed").with_reason(
                "Finishing a trip resets every item in the cart and must be confirmed",
            ));
        }

        let grocer = self.grocer;
        let items = grocer.store.list_items().await?;
        let checkout = Checkout::plan(&items, grocer.missed_policy, Timestamp::now())?;

        let Some(trip) = checkout.trip else {
            debug!("Finished trip with an empty list; nothing recorded");
            return Ok(FinishOutcome::NothingToRecord);
        };

        grocer.store.commit_trip(&trip, &checkout.resets).await?;
        info!(
            "Recorded trip {}: {} purchased, {} missed, {} reset",
            trip.id,
            trip.purchased.len(),
            trip.missed.len(),
            checkout.resets.len()
        );
        Ok(FinishOutcome::Recorded(trip))
    }

    async fn apply(&mut self, params: &Id, event: StatusEvent) -> Result<Item> {
        let current = resolve_in(&self.items, &params.id).map_err(|e| match e {
            GroceryError::ItemNotFound { id } => GroceryError::validation("id")
                .with_reason(format!("{id} is not on the shopping list")),
            other => other,
        })?;

        let next = current.status.apply(event, Mode::Shopping)?;
        if next == current.status {
            return Ok(current.clone());
        }

        let updated = current.with_status(next);
        self.grocer.store.update_item(&updated).await?;
        debug!(
            "{event}: {} {} -> {}",
            updated.id,
            current.status.as_str(),
            next.as_str()
        );

        if let Some(slot) = self.items.iter_mut().find(|i| i.id == updated.id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }
}
