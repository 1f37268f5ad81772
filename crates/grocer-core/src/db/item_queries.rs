//! Item CRUD operations and queries.

use rusqlite::{params, types::Type, OptionalExtension, Row, Transaction};

use crate::{
    error::{DatabaseResultExt, GroceryError, Result},
    models::{Category, Item, ItemId, ItemStatus},
};

const INSERT_ITEM_SQL: &str = "INSERT INTO items (id, name, category, aisle, status, price, quantity, is_essential) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const UPDATE_ITEM_SQL: &str = "UPDATE items SET name = ?2, category = ?3, aisle = ?4, status = ?5, price = ?6, quantity = ?7, is_essential = ?8 WHERE id = ?1";
const DELETE_ITEM_SQL: &str = "DELETE FROM items WHERE id = ?1";
const SELECT_ITEMS_SQL: &str = "SELECT id, name, category, aisle, status, price, quantity, is_essential FROM items ORDER BY rowid";
const SELECT_ITEM_BY_ID_SQL: &str = "SELECT id, name, category, aisle, status, price, quantity, is_essential FROM items WHERE id = ?1";

impl super::Database {
    /// Helper function to construct an Item from a database row
    fn build_item_from_row(row: &Row) -> rusqlite::Result<Item> {
        let category_str: String = row.get(2)?;
        let category = category_str.parse::<Category>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, Type::Text, e.into())
        })?;

        let status_str: String = row.get(4)?;
        let status = status_str.parse::<ItemStatus>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, e.into())
        })?;

        Ok(Item {
            id: ItemId::from(row.get::<_, String>(0)?),
            name: row.get(1)?,
            category,
            aisle: row.get(3)?,
            status,
            price: row.get(5)?,
            quantity: row.get(6)?,
            is_essential: row.get(7)?,
        })
    }

    /// Writes every field of `item` over the stored row with the same id.
    pub(super) fn replace_item_in(tx: &Transaction, item: &Item) -> Result<()> {
        let changed = tx
            .execute(
                UPDATE_ITEM_SQL,
                params![
                    item.id.as_str(),
                    &item.name,
                    item.category.as_str(),
                    &item.aisle,
                    item.status.as_str(),
                    item.price,
                    item.quantity,
                    item.is_essential
                ],
            )
            .db_context("Failed to update item")?;

        if changed == 0 {
            return Err(GroceryError::ItemNotFound {
                id: item.id.to_string(),
            });
        }
        Ok(())
    }

    /// Inserts a new item.
    pub fn add_item(&mut self, item: &Item) -> Result<()> {
        self.connection
            .execute(
                INSERT_ITEM_SQL,
                params![
                    item.id.as_str(),
                    &item.name,
                    item.category.as_str(),
                    &item.aisle,
                    item.status.as_str(),
                    item.price,
                    item.quantity,
                    item.is_essential
                ],
            )
            .db_context("Failed to insert item")?;
        Ok(())
    }

    /// Replaces the stored item with the same id.
    pub fn update_item(&mut self, item: &Item) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::replace_item_in(&tx, item)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Permanently removes an item.
    pub fn delete_item(&mut self, id: &ItemId) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_ITEM_SQL, params![id.as_str()])
            .db_context("Failed to delete item")?;

        if deleted == 0 {
            return Err(GroceryError::ItemNotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Retrieves a single item by its ID.
    pub fn get_item(&self, id: &ItemId) -> Result<Option<Item>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ITEM_BY_ID_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id.as_str()], Self::build_item_from_row)
            .optional()
            .db_context("Failed to get item")
    }

    /// Retrieves every item in insertion order.
    pub fn list_items(&self) -> Result<Vec<Item>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ITEMS_SQL)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map([], Self::build_item_from_row)
            .db_context("Failed to query items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch items")?;

        Ok(items)
    }
}
