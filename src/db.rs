//! SQLite connection management for the inventory database.
//!
//! Both stores keep one connection open for the lifetime of the process;
//! each operation is a single statement with per-statement commit
//! granularity. The schema is created idempotently whenever a connection
//! is opened, so a missing database file is never an error here.

use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Result type for database operations
pub type DbResult<T> = Result<T, rusqlite::Error>;

/// Returns the path to the inventory database file.
fn db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stockroom")
        .join("inventory.db")
}

/// Opens (or creates) the inventory database at the default location and
/// initialises the schema.
pub fn open_default() -> DbResult<Connection> {
    let path = db_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    log::info!("Inventory DB: {}", path.display());
    open_at(&path)
}

/// Opens (or creates) the inventory database at an explicit path and
/// initialises the schema.
pub fn open_at(path: &Path) -> DbResult<Connection> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Creates the `users` and `products` tables if they do not already exist.
pub(crate) fn init_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS products (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            name     TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            price    REAL NOT NULL
        );",
    )
}
