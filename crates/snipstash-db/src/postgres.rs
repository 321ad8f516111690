//! PostgreSQL store adapters.
//!
//! Items keep their fixed columns (`title`, `code`, `user_id`) alongside a
//! JSONB `extra` column holding every other member of the create payload.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use snipstash_models::{Item, ItemId, NewItem, NewUser, UserRecord};

use crate::store::{ItemStore, StoreError, UserStore};

#[derive(Clone, Debug)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    #[instrument(skip(self, user), fields(db.operation = "INSERT", db.table = "users"))]
    async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (email, password_hash)
             VALUES ($1, $2)
             RETURNING id, email, password_hash, created_at",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    #[instrument(skip(self, email), fields(db.operation = "SELECT", db.table = "users"))]
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}

#[derive(FromRow)]
struct ItemRow {
    id: ItemId,
    title: String,
    code: Option<String>,
    user_id: Option<String>,
    extra: Json<Map<String, Value>>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            title: row.title,
            code: row.code,
            user_id: row.user_id,
            extra: row.extra.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    #[instrument(skip(self, item), fields(db.operation = "INSERT", db.table = "items"))]
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let row = sqlx::query_as::<_, ItemRow>(
            "INSERT INTO items (title, code, user_id, extra)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, code, user_id, extra",
        )
        .bind(&item.title)
        .bind(&item.code)
        .bind(&item.user_id)
        .bind(Json(&item.extra))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "items"))]
    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            "SELECT id, title, code, user_id, extra FROM items ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self), fields(db.operation = "DELETE", db.table = "items"))]
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let id: ItemId = id
            .parse()
            .map_err(|_| StoreError::InvalidId(id.to_string()))?;

        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(db.operation = "DELETE", db.table = "items"))]
    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM items")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
