//! Item model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::{ItemId, ItemStatus};

/// Fixed set of categories used to group the inventory.
///
/// Deserialization accepts the same spellings as [`FromStr`] and maps
/// anything unrecognised to [`Category::Other`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    #[default]
    Food,
    Drinks,
    Cleaning,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Other,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Drinks,
        Category::Cleaning,
        Category::PersonalCare,
        Category::Other,
    ];

    /// Human-readable name, also used as the persisted representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Drinks => "Drinks",
            Category::Cleaning => "Cleaning",
            Category::PersonalCare => "Personal Care",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "food" => Ok(Category::Food),
            "drinks" => Ok(Category::Drinks),
            "cleaning" => Ok(Category::Cleaning),
            "personalcare" => Ok(Category::PersonalCare),
            "other" => Ok(Category::Other),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(Category::Other))
    }
}

/// An inventory item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Unique identifier for the item, fixed at creation
    pub id: ItemId,

    /// Display name (never empty)
    pub name: String,

    /// Grouping category
    #[serde(default)]
    pub category: Category,

    /// Free-text aisle label used for ordering during a trip
    #[serde(default)]
    pub aisle: Option<String>,

    /// Current position in the shopping state machine
    #[serde(default)]
    pub status: ItemStatus,

    /// Optional unit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Optional quantity to buy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Marked as a staple
    #[serde(default)]
    pub is_essential: bool,
}

impl Item {
    /// Whether the item is on the active shopping list.
    pub fn is_on_list(&self) -> bool {
        self.status.is_on_list()
    }

    /// Copy of this item with a different status.
    pub fn with_status(&self, status: ItemStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// The aisle label if it holds anything besides whitespace.
    pub fn aisle_label(&self) -> Option<&str> {
        self.aisle.as_deref().map(str::trim).filter(|a| !a.is_empty())
    }
}

/// Trims an aisle label, mapping blank input to `None`.
pub fn normalize_aisle(aisle: Option<&str>) -> Option<String> {
    aisle
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from)
}
