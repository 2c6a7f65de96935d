//! In-memory fallback store.

use chrono::Utc;
use tokio::sync::Mutex;

use crate::models::Item;

/// Ordered in-process sequence of items, used when no database is configured.
/// Contents live for the life of the process and are lost on restart; nothing
/// here is ever synchronized with a database.
pub struct MemoryStore {
    items: Mutex<Vec<Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Contents verbatim, in insertion order.
    pub async fn list(&self) -> Vec<Item> {
        self.items.lock().await.clone()
    }

    /// First match wins.
    pub async fn get(&self, id: i64) -> Option<Item> {
        self.items
            .lock()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    /// Next id is one past the largest existing id, 1 when empty.
    pub async fn insert(&self, name: &str, description: Option<&str>) -> Item {
        let mut items = self.items.lock().await;
        let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        let item = Item {
            id,
            name: name.to_string(),
            description: description.map(|d| d.to_string()),
            created_at: Utc::now(),
        };
        items.push(item.clone());
        item
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
