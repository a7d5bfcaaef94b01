//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: the `PasswordStore` operations

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{PasswordRecord, ReusedPassword};
pub use schema::SQLITE_INIT;
pub use sqlite::{PasswordStore, SqlitePool};

use crate::error::MintError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tracing::debug;

/// Open (creating if absent) the store at `database_url` and apply the
/// bundled schema. The pool is capped at a single connection: SQLite is not
/// safe for unsynchronized concurrent writers, so save/delete/list callers
/// from any thread are serialized here.
pub async fn connect(database_url: &str) -> Result<PasswordStore, MintError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_opts)
        .await?;
    let store = PasswordStore::new(pool);
    store.init_schema().await?;
    debug!(database_url, "password store ready");
    Ok(store)
}
