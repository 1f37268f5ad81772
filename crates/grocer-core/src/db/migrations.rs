//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

/// Metadata columns added to `items` after the first schema version.
const ITEM_METADATA_COLUMNS: [(&str, &str); 3] = [
    ("is_essential", "ALTER TABLE items ADD COLUMN is_essential INTEGER NOT NULL DEFAULT 0"),
    ("price", "ALTER TABLE items ADD COLUMN price REAL"),
    ("quantity", "ALTER TABLE items ADD COLUMN quantity REAL"),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Adds item metadata columns that older databases lack.
    fn apply_migrations(&self) -> Result<()> {
        for (column, alter_sql) in ITEM_METADATA_COLUMNS {
            if !self.has_column("items", column)? {
                log::info!("Migrating items table: adding column {column}");
                self.connection
                    .execute(alter_sql, [])
                    .db_context("Failed to add item metadata column")?;
            }
        }

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}
