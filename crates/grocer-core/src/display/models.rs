//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data types stay free of
//! presentation concerns. Everything renders as markdown.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{Category, Item, ItemSnapshot, ItemStatus, Trip, TripSummary};

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Item {
    /// One-line form used inside lists: status icon, name, aisle and id.
    pub(crate) fn fmt_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} **{}**", self.status.with_icon(), self.name)?;
        if let Some(aisle) = self.aisle_label() {
            write!(f, " · aisle {aisle}")?;
        }
        if self.is_essential {
            write!(f, " · essential")?;
        }
        writeln!(f, " (`{}`)", self.id)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.name, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Category: {}", self.category)?;
        if let Some(aisle) = self.aisle_label() {
            writeln!(f, "- Aisle: {aisle}")?;
        }
        if let Some(price) = self.price {
            writeln!(f, "- Price: {price:.2}")?;
        }
        if let Some(quantity) = self.quantity {
            writeln!(f, "- Quantity: {quantity}")?;
        }
        if self.is_essential {
            writeln!(f, "- Essential: yes")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ItemSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        match self.aisle.as_deref().map(str::trim) {
            Some(aisle) if !aisle.is_empty() => write!(f, " (aisle {aisle})"),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = TripSummary::from(self);
        writeln!(
            f,
            "## {} ({} purchased, {} missed)",
            LocalDate(&self.date),
            summary.purchased,
            summary.missed
        )?;
        writeln!(f)?;
        writeln!(f, "- Completed: {}", LocalDateTime(&self.date))?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f)?;

        if !self.purchased.is_empty() {
            writeln!(f, "#### Purchased")?;
            writeln!(f)?;
            for snapshot in &self.purchased {
                writeln!(f, "- {snapshot}")?;
            }
            writeln!(f)?;
        }

        if !self.missed.is_empty() {
            writeln!(f, "#### Missed")?;
            writeln!(f)?;
            for snapshot in &self.missed {
                writeln!(f, "- {snapshot}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn milk() -> Item {
        Item {
            id: "itm-00aa".into(),
            name: "Milk".to_string(),
            category: Category::Drinks,
            aisle: Some("4".to_string()),
            status: ItemStatus::Needed,
            price: Some(1.5),
            quantity: None,
            is_essential: true,
        }
    }

    #[test]
    fn test_item_display() {
        let output = milk().to_string();
        assert!(output.starts_with("### Milk (○ Needed)"));
        assert!(output.contains("- ID: itm-00aa"));
        assert!(output.contains("- Category: Drinks"));
        assert!(output.contains("- Aisle: 4"));
        assert!(output.contains("- Price: 1.50"));
        assert!(output.contains("- Essential: yes"));
        assert!(!output.contains("Quantity"));
    }

    #[test]
    fn test_category_display_uses_label() {
        assert_eq!(Category::PersonalCare.to_string(), "Personal Care");
        assert_eq!(ItemStatus::InCart.to_string(), "in_cart");
    }

    #[test]
    fn test_trip_display_sections() {
        let trip = Trip {
            id: "trp-1".into(),
            date: Timestamp::from_second(1_773_490_245).unwrap(),
            purchased: vec![ItemSnapshot::from(&milk())],
            missed: vec![],
        };
        let output = trip.to_string();
        assert!(output.contains("(1 purchased, 0 missed)"));
        assert!(output.contains("#### Purchased"));
        assert!(output.contains("- Milk (aisle 4)"));
        assert!(!output.contains("#### Missed"));
    }
}
