//! Product store: single-statement CRUD against the `products` table.
//!
//! - Ids are assigned by SQLite and stable once assigned.
//! - `edit` and `delete` on a missing id are silent no-ops (logged at warn).
//! - No operation spans more than one statement; faults surface as
//!   [`StoreError`] and are never retried here.

use rusqlite::{params, Connection};

use crate::db;
use crate::error::StoreError;
use crate::models::Product;

/// Persists product records. Owns one SQLite connection for its whole
/// lifetime.
pub struct ProductStore {
    conn: Connection,
}

impl ProductStore {
    /// Opens the store against the default database location.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self::with_connection(db::open_default()?))
    }

    /// Wraps an already-open connection. The schema must exist.
    pub fn with_connection(conn: Connection) -> Self {
        ProductStore { conn }
    }

    /// Inserts a new product with a store-assigned id.
    pub fn add(&self, name: &str, quantity: i64, price: f64) -> Result<(), StoreError> {
        log::debug!("Adding product '{name}' (quantity {quantity}, price {price})");
        self.conn.execute(
            "INSERT INTO products (name, quantity, price) VALUES (?1, ?2, ?3)",
            params![name, quantity, price],
        )?;
        Ok(())
    }

    /// Overwrites name, quantity and price of the row matching `id`.
    ///
    /// A missing id reports success without changing anything.
    pub fn edit(&self, id: i64, name: &str, quantity: i64, price: f64) -> Result<(), StoreError> {
        log::debug!("Editing product {id}");
        let changed = self.conn.execute(
            "UPDATE products SET name = ?1, quantity = ?2, price = ?3 WHERE id = ?4",
            params![name, quantity, price, id],
        )?;
        if changed == 0 {
            log::warn!("Edit of product {id} matched no row");
        }
        Ok(())
    }

    /// Removes the row matching `id`; a missing id is a no-op.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        log::debug!("Deleting product {id}");
        let changed = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1", params![id])?;
        if changed == 0 {
            log::warn!("Delete of product {id} matched no row");
        }
        Ok(())
    }

    /// Returns every product, ordered by id ascending (insertion order).
    pub fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, quantity, price FROM products ORDER BY id")?;
        let products = stmt
            .query_map([], |row| {
                Ok(Product {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    quantity: row.get(2)?,
                    price: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }
}
