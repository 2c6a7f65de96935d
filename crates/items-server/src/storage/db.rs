//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::{ApiError, ApiResult};
use crate::models::Item;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        Self::ensure_schema(&pool)
            .await
            .context("Failed to create items table")?;

        Ok(Self { pool })
    }

    /// Idempotent, safe to run on every startup.
    async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let items: Vec<Item> = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at
            FROM items
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn get_item(&self, id: i64) -> ApiResult<Option<Item>> {
        let item: Option<Item> = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at
            FROM items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn create_item(&self, name: &str, description: Option<&str>) -> ApiResult<Item> {
        let result = sqlx::query(
            r#"
            INSERT INTO items (name, description)
            VALUES (?1, ?2)
            "#,
        )
        .bind(name)
        .bind(description)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::OperationFailed(
                "Failed to insert item".to_string(),
            ));
        }

        // Re-read so the caller gets the canonical row, including the
        // generated id and timestamp.
        match self.get_item(result.last_insert_rowid()).await? {
            Some(item) => Ok(item),
            None => Err(ApiError::OperationFailed(
                "Failed to insert item".to_string(),
            )),
        }
    }
}
