//! Parameter structures for grocer operations
//!
//! Shared parameter structures used across interfaces (the CLI today) without
//! framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation that belongs to the domain (non-empty names, known categories,
//! non-negative prices) lives here so every interface gets it for free.

use serde::{Deserialize, Serialize};

use crate::{
    error::{GroceryError, Result},
    models::{normalize_aisle, Category},
};

/// Generic parameters for operations requiring just an item ID.
///
/// The id may be a unique prefix of a full item id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID (or unique ID prefix) of the item to operate on
    pub id: String,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for adding an item to the inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItem {
    /// Display name of the item (required)
    pub name: String,
    /// Category name; defaults to Food
    pub category: Option<String>,
    /// Optional aisle label
    pub aisle: Option<String>,
    /// Optional unit price
    pub price: Option<f64>,
    /// Optional quantity
    pub quantity: Option<f64>,
    /// Mark the item as a staple
    #[serde(default)]
    pub essential: bool,
    /// Put the item straight on the shopping list
    #[serde(default)]
    pub needed: bool,
}

/// Validated fields of a new item.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedItem {
    pub name: String,
    pub category: Category,
    pub aisle: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
}

impl CreateItem {
    /// Validate creation parameters.
    ///
    /// # Errors
    ///
    /// * `GroceryError::Validation` - When the name is blank
    /// * `GroceryError::Validation` - When the category is unknown
    /// * `GroceryError::Validation` - When price or quantity is negative
    ///
    /// # Examples
    ///
    /// ```rust
    /// use grocer_core::{models::Category, params::CreateItem};
    ///
    /// let params = CreateItem {
    ///     name: "  Milk ".to_string(),
    ///     category: Some("drinks".to_string()),
    ///     aisle: Some(" ".to_string()),
    ///     ..Default::default()
    /// };
    /// let valid = params.validate()?;
    /// assert_eq!(valid.name, "Milk");
    /// assert_eq!(valid.category, Category::Drinks);
    /// assert_eq!(valid.aisle, None);
    ///
    /// let blank = CreateItem::default();
    /// assert!(blank.validate().is_err());
    /// # Ok::<(), grocer_core::GroceryError>(())
    /// ```
    pub fn validate(&self) -> Result<ValidatedItem> {
        Ok(ValidatedItem {
            name: validate_name(&self.name)?,
            category: self
                .category
                .as_deref()
                .map(parse_category)
                .transpose()?
                .unwrap_or_default(),
            aisle: normalize_aisle(self.aisle.as_deref()),
            price: validate_amount("price", self.price)?,
            quantity: validate_amount("quantity", self.quantity)?,
        })
    }
}

/// Parameters for editing an existing item.
///
/// Only provided fields change. Status is deliberately absent: it only moves
/// through list and cart events. An empty `aisle` string clears the aisle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItem {
    /// Item ID (or unique prefix) to update (required)
    pub id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub aisle: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub essential: Option<bool>,
}

/// Validated changes for an item update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub category: Option<Category>,
    /// `Some(None)` clears the aisle
    pub aisle: Option<Option<String>>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub essential: Option<bool>,
}

impl ItemChanges {
    /// Whether nothing would change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Human-readable list of the requested changes.
    pub fn describe(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("Renamed to {name}"));
        }
        if let Some(category) = &self.category {
            changes.push(format!("Moved to category {}", category.as_str()));
        }
        match &self.aisle {
            Some(Some(aisle)) => changes.push(format!("Set aisle to {aisle}")),
            Some(None) => changes.push("Cleared aisle".to_string()),
            None => {}
        }
        if let Some(price) = self.price {
            changes.push(format!("Set price to {price:.3}"));
        }
        if let Some(quantity) = self.quantity {
            changes.push(format!("Set quantity to {quantity}"));
        }
        if let Some(essential) = self.essential {
            changes.push(if essential {
                "Marked as essential".to_string()
            } else {
                "Unmarked as essential".to_string()
            });
        }
        changes
    }
}

impl UpdateItem {
    /// Validate update parameters.
    ///
    /// # Errors
    ///
    /// * `GroceryError::Validation` - When a provided name is blank
    /// * `GroceryError::Validation` - When a provided category is unknown
    /// * `GroceryError::Validation` - When price or quantity is negative
    pub fn validate(&self) -> Result<ItemChanges> {
        Ok(ItemChanges {
            name: self.name.as_deref().map(validate_name).transpose()?,
            category: self.category.as_deref().map(parse_category).transpose()?,
            aisle: self
                .aisle
                .as_deref()
                .map(|aisle| normalize_aisle(Some(aisle))),
            price: validate_amount("price", self.price)?,
            quantity: validate_amount("quantity", self.quantity)?,
            essential: self.essential,
        })
    }
}

/// Parameters for listing the inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListItems {
    /// Case-insensitive substring of the item name
    pub search: Option<String>,
    /// Restrict to one category
    pub category: Option<String>,
    /// Only items on the shopping list
    #[serde(default)]
    pub on_list: bool,
}

/// Parameters for finishing a trip.
///
/// Finishing archives the trip and resets the cart, so it has to be
/// confirmed explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinishTrip {
    /// Explicit confirmation (required)
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for clearing the trip history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearHistory {
    /// Explicit confirmation (required, this cannot be undone)
    #[serde(default)]
    pub confirmed: bool,
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GroceryError::validation("name").with_reason("Item name cannot be empty"));
    }
    Ok(trimmed.to_string())
}

fn parse_category(category: &str) -> Result<Category> {
    category.parse::<Category>().map_err(|_| {
        GroceryError::validation("category").with_reason(format!(
            "Invalid category: {category}. Must be one of: {}",
            Category::ALL
                .iter()
                .map(Category::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}

fn validate_amount(field: &str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(GroceryError::validation(field)
            .with_reason(format!("{field} must be a non-negative number, got {v}"))),
        other => Ok(other),
    }
}
