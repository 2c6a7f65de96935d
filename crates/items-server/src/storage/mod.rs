//! Storage layer
//!
//! One capability, two variants: SQLite-backed when a database path is
//! configured, in-memory fallback otherwise. The variant is chosen once at
//! startup; handlers only ever see `Store`. The two stores share no data.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryStore;

use crate::error::ApiResult;
use crate::models::Item;

pub enum Store {
    Database(Database),
    Memory(MemoryStore),
}

impl Store {
    /// True when running without a database.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Store::Memory(_))
    }

    /// All items: newest first on the database path, insertion order on the
    /// fallback path.
    pub async fn list_items(&self) -> ApiResult<Vec<Item>> {
        match self {
            Store::Database(db) => db.list_items().await,
            Store::Memory(mem) => Ok(mem.list().await),
        }
    }

    pub async fn get_item(&self, id: i64) -> ApiResult<Option<Item>> {
        match self {
            Store::Database(db) => db.get_item(id).await,
            Store::Memory(mem) => Ok(mem.get(id).await),
        }
    }

    pub async fn create_item(&self, name: &str, description: Option<&str>) -> ApiResult<Item> {
        match self {
            Store::Database(db) => db.create_item(name, description).await,
            Store::Memory(mem) => Ok(mem.insert(name, description).await),
        }
    }
}
