//! SQLite-backed persistence gateway for inventory items.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use thiserror::Error;

use stockroom_inventory::InventoryItem;

/// Storage-layer failure.
///
/// Nothing in the service handles these beyond logging; the HTTP layer
/// surfaces them as a server error and the request fails.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence gateway for `InventoryItem` records.
///
/// Constructed once at startup around a shared connection pool and handed
/// to the HTTP layer. Every operation is a single-row read or write; there
/// are no transactions spanning multiple records.
#[derive(Debug, Clone)]
pub struct ItemStore {
    pool: SqlitePool,
}

impl ItemStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the backing table if it does not exist yet.
    ///
    /// Table creation is the only schema responsibility here; there is no
    /// migration tooling.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS inventory_item (
                id        INTEGER PRIMARY KEY AUTOINCREMENT,
                name      TEXT NOT NULL,
                category  TEXT NOT NULL,
                quantity  INTEGER NOT NULL,
                threshold INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::debug!("inventory_item table ready");
        Ok(())
    }

    /// Insert the item (assigning a fresh id) when it has none, otherwise
    /// overwrite the row matching its id.
    ///
    /// Returns the persisted record, id included.
    pub async fn save(&self, item: InventoryItem) -> Result<InventoryItem, StoreError> {
        match item.id {
            None => {
                let result = sqlx::query(
                    "INSERT INTO inventory_item (name, category, quantity, threshold) \
                     VALUES (?, ?, ?, ?)",
                )
                .bind(&item.name)
                .bind(&item.category)
                .bind(item.quantity)
                .bind(item.threshold)
                .execute(&self.pool)
                .await?;

                Ok(InventoryItem {
                    id: Some(result.last_insert_rowid()),
                    ..item
                })
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    INSERT INTO inventory_item (id, name, category, quantity, threshold)
                    VALUES (?, ?, ?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        category = excluded.category,
                        quantity = excluded.quantity,
                        threshold = excluded.threshold
                    "#,
                )
                .bind(id)
                .bind(&item.name)
                .bind(&item.category)
                .bind(item.quantity)
                .bind(item.threshold)
                .execute(&self.pool)
                .await?;

                Ok(item)
            }
        }
    }

    /// Fetch one record; absence is `None`, not an error.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<InventoryItem>, StoreError> {
        let row = sqlx::query(
            "SELECT id, name, category, quantity, threshold FROM inventory_item WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(item_from_row).transpose()
    }

    /// Fetch every record. Callers must not rely on any particular order.
    pub async fn find_all(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let rows = sqlx::query("SELECT id, name, category, quantity, threshold FROM inventory_item")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(item_from_row).collect()
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 FROM inventory_item WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Remove the row if present; an absent id is a no-op.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM inventory_item WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn item_from_row(row: SqliteRow) -> Result<InventoryItem, StoreError> {
    Ok(InventoryItem {
        id: Some(row.try_get("id")?),
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        quantity: row.try_get("quantity")?,
        threshold: row.try_get("threshold")?,
    })
}
