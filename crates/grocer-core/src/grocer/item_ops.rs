//! Inventory operations: editing items and managing list membership.

use log::debug;

use super::Grocer;
use crate::{
    display::{Items, UpdateResult},
    error::{GroceryError, Result},
    models::{Category, Item, ItemId, ItemStatus, Mode, StatusEvent},
    params::{CreateItem, Id, ListItems, UpdateItem},
    shopping::ListPreview,
};

/// Resolves `query` against `items` as an exact id or a unique id prefix.
pub(crate) fn resolve_in<'a>(items: &'a [Item], query: &str) -> Result<&'a Item> {
    let query = query.trim();
    if query.is_empty() {
        return Err(GroceryError::validation("id").with_reason("Item ID cannot be empty"));
    }

    if let Some(exact) = items.iter().find(|i| i.id.as_str() == query) {
        return Ok(exact);
    }

    let mut matches = items.iter().filter(|i| i.id.as_str().starts_with(query));
    match (matches.next(), matches.next()) {
        (Some(item), None) => Ok(item),
        (None, _) => Err(GroceryError::ItemNotFound {
            id: query.to_string(),
        }),
        (Some(_), Some(_)) => Err(GroceryError::validation("id")
            .with_reason(format!("'{query}' matches more than one item"))),
    }
}

impl Grocer {
    /// Adds a new item to the inventory.
    ///
    /// The item starts as not needed, or straight on the list when
    /// `params.needed` is set.
    ///
    /// # Errors
    ///
    /// * `GroceryError::Validation` - When the parameters are invalid
    /// * `GroceryError::StoreUnavailable` - When the store rejects the write
    pub async fn add_item(&mut self, params: CreateItem) -> Result<Item> {
        let valid = params.validate()?;
        let item = Item {
            id: ItemId::generate(),
            name: valid.name,
            category: valid.category,
            aisle: valid.aisle,
            status: if params.needed {
                ItemStatus::Needed
            } else {
                ItemStatus::NotNeeded
            },
            price: valid.price,
            quantity: valid.quantity,
            is_essential: params.essential,
        };

        self.store.add_item(&item).await?;
        debug!("Added item {} ({})", item.id, item.status.as_str());
        Ok(item)
    }

    /// Edits an item's details. Status cannot be changed here.
    ///
    /// Returns the updated item together with a description of each change.
    pub async fn update_item(&mut self, params: UpdateItem) -> Result<UpdateResult<Item>> {
        let changes = params.validate()?;
        if changes.is_empty() {
            return Err(GroceryError::validation("update")
                .with_reason("No changes specified"));
        }

        let current = self.find_item(&params.id).await?;
        let mut updated = current.clone();
        if let Some(name) = &changes.name {
            updated.name = name.clone();
        }
        if let Some(category) = changes.category {
            updated.category = category;
        }
        if let Some(aisle) = &changes.aisle {
            updated.aisle = aisle.clone();
        }
        if changes.price.is_some() {
            updated.price = changes.price;
        }
        if changes.quantity.is_some() {
            updated.quantity = changes.quantity;
        }
        if let Some(essential) = changes.essential {
            updated.is_essential = essential;
        }

        if updated != current {
            self.store.update_item(&updated).await?;
        }
        Ok(UpdateResult::with_changes(updated, changes.describe()))
    }

    /// Permanently deletes an item. Returns the deleted item, or `None` if
    /// nothing matched. Recorded trips are unaffected.
    pub async fn delete_item(&mut self, params: &Id) -> Result<Option<Item>> {
        let item = match self.find_item(&params.id).await {
            Ok(item) => item,
            Err(GroceryError::ItemNotFound { .. }) => return Ok(None),
            Err(e) => return Err(e),
        };

        match self.store.delete_item(&item.id).await {
            Ok(()) => Ok(Some(item)),
            Err(GroceryError::ItemNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Fetches an item by exact id.
    pub async fn get_item(&self, id: &ItemId) -> Result<Option<Item>> {
        self.store.get_item(id).await
    }

    /// Resolves an exact id or a unique id prefix to an item.
    ///
    /// # Errors
    ///
    /// * `GroceryError::ItemNotFound` - When nothing matches
    /// * `GroceryError::Validation` - When the prefix is ambiguous
    pub async fn find_item(&self, query: &str) -> Result<Item> {
        let items = self.store.list_items().await?;
        resolve_in(&items, query).cloned()
    }

    /// Lists the inventory, ordered by category and then name.
    pub async fn list_items(&self, params: &ListItems) -> Result<Items> {
        let category = params
            .category
            .as_deref()
            .map(|c| {
                c.parse::<Category>().map_err(|reason| {
                    GroceryError::validation("category").with_reason(reason)
                })
            })
            .transpose()?;
        let needle = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut items: Vec<Item> = self
            .store
            .list_items()
            .await?
            .into_iter()
            .filter(|i| category.map_or(true, |c| i.category == c))
            .filter(|i| {
                needle
                    .as_deref()
                    .map_or(true, |n| i.name.to_lowercase().contains(n))
            })
            .filter(|i| !params.on_list || i.is_on_list())
            .collect();

        items.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(Items(items))
    }

    /// Puts an item on the shopping list.
    pub async fn add_to_list(&mut self, params: &Id) -> Result<Item> {
        self.apply_managing_event(params, StatusEvent::AddToList).await
    }

    /// Takes an item off the shopping list.
    pub async fn remove_from_list(&mut self, params: &Id) -> Result<Item> {
        self.apply_managing_event(params, StatusEvent::RemoveFromList)
            .await
    }

    /// Count and first few items of the list, for the overview.
    pub async fn preview(&self) -> Result<ListPreview> {
        let items = self.store.list_items().await?;
        Ok(ListPreview::of(&items))
    }

    async fn apply_managing_event(&mut self, params: &Id, event: StatusEvent) -> Result<Item> {
        let item = self.find_item(&params.id).await?;
        let next = item.status.apply(event, Mode::Managing)?;
        if next == item.status {
            return Ok(item);
        }

        let updated = item.with_status(next);
        self.store.update_item(&updated).await?;
        debug!(
            "{event}: {} {} -> {}",
            item.id,
            item.status.as_str(),
            next.as_str()
        );
        Ok(updated)
    }
}
