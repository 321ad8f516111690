//! Store contracts for users and items, and the errors adapters raise.

use async_trait::async_trait;
use thiserror::Error;

use snipstash_models::{Item, NewItem, NewUser, UserRecord};

/// Persistence errors raised by store adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be reached.
    #[error("store connection failed: {0}")]
    Connection(String),
    /// Query or mutation failed during execution.
    #[error("store query failed: {0}")]
    Query(String),
    /// A unique key already holds this value.
    #[error("duplicate value for unique key `{0}`")]
    Conflict(String),
    /// The supplied identifier is not well-formed.
    #[error("invalid id `{0}`")]
    InvalidId(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::Conflict(db_err.constraint().unwrap_or("unknown").to_string())
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => StoreError::Connection(err.to_string()),
            _ => StoreError::Query(err.to_string()),
        }
    }
}

/// Credential store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user. Fails with [`StoreError::Conflict`] when the email is taken.
    async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError>;

    /// Fetch a user by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
}

/// Item store.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError>;

    /// All items in store order.
    async fn find_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Delete by id. Returns whether a record was removed; a well-formed id
    /// that matches nothing is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;

    /// Remove every item, returning how many were deleted.
    async fn delete_all(&self) -> Result<u64, StoreError>;
}
