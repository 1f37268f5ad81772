//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of items and
//! trips with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::{
    models::{Category, Item, Trip},
    shopping::{ListPreview, Progress},
};

/// Newtype wrapper for displaying the inventory.
///
/// Items are expected in category-then-name order (as returned by
/// [`crate::Grocer::list_items`]); a heading is written each time the
/// category changes.
///
/// # Examples
///
/// ```rust
/// use grocer_core::{
///     display::Items,
///     models::{Category, Item, ItemStatus},
/// };
///
/// let item = Item {
///     id: "itm-1".into(),
///     name: "Bread".to_string(),
///     category: Category::Food,
///     aisle: None,
///     status: ItemStatus::NotNeeded,
///     price: None,
///     quantity: None,
///     is_essential: false,
/// };
/// let output = format!("{}", Items(vec![item]));
/// assert!(output.contains("## Food"));
/// assert!(output.contains("Bread"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Items(pub Vec<Item>);

impl Items {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the item at the given index.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.0.get(index)
    }

    /// Get an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }
}

impl Index<usize> for Items {
    type Output = Item;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Items {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No items found.");
        }

        let mut current: Option<Category> = None;
        for item in &self.0 {
            if current != Some(item.category) {
                if current.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "## {}", item.category)?;
                writeln!(f)?;
                current = Some(item.category);
            }
            item.fmt_line(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the trip history.
#[derive(Debug, Clone, PartialEq)]
pub struct Trips(pub Vec<Trip>);

impl Trips {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of trips in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the trip at the given index.
    pub fn get(&self, index: usize) -> Option<&Trip> {
        self.0.get(index)
    }

    /// Get an iterator over the trips.
    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.0.iter()
    }
}

impl Index<usize> for Trips {
    type Output = Trip;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Trips {
    type Item = Trip;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trips {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Trips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No shopping history yet.");
        }

        let count = self.0.len();
        writeln!(
            f,
            "{count} trip{} recorded",
            if count == 1 { "" } else { "s" }
        )?;
        writeln!(f)?;
        for trip in &self.0 {
            write!(f, "{trip}")?;
        }
        Ok(())
    }
}

/// The aisle-ordered list walked during a trip, with cart progress.
pub struct ShoppingList<'a> {
    pub items: &'a [Item],
    pub progress: Progress,
}

impl<'a> ShoppingList<'a> {
    pub fn new(items: &'a [Item]) -> Self {
        Self {
            items,
            progress: Progress::of(items),
        }
    }
}

impl fmt::Display for ShoppingList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Shopping ({}/{} in cart, {:.0}%)",
            self.progress.in_cart,
            self.progress.total,
            self.progress.fraction() * 100.0
        )?;
        writeln!(f)?;

        if self.items.is_empty() {
            return writeln!(f, "Your shopping list is empty.");
        }
        for item in self.items {
            item.fmt_line(f)?;
        }
        if self.progress.is_complete() {
            writeln!(f)?;
            writeln!(f, "Everything is in the cart.")?;
        }
        Ok(())
    }
}

impl fmt::Display for ListPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.can_shop() {
            return writeln!(f, "Your shopping list is empty.");
        }

        writeln!(
            f,
            "# Shopping list ({} item{})",
            self.total,
            if self.total == 1 { "" } else { "s" }
        )?;
        writeln!(f)?;
        for item in &self.items {
            writeln!(f, "- {}", item.name)?;
        }
        if self.remaining() > 0 {
            writeln!(f, "- ...and {} more", self.remaining())?;
        }
        Ok(())
    }
}
