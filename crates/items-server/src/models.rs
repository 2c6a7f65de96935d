//! Wire types for the items API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Note attached to every response served from the in-memory fallback.
pub const FALLBACK_NOTE: &str = "Using in-memory store because no database is configured";

/// A stored item. `created_at` is set once at creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /items`. `name` is optional here so a missing field reaches
/// the required-field check instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemsEnvelope {
    pub success: bool,
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ItemEnvelope {
    pub success: bool,
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// `{success: false, error}` shape shared by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}
