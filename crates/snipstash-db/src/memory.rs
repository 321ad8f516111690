//! In-memory store adapters used by the HTTP test-suite.
//!
//! They mirror the PostgreSQL adapters' observable behaviour: unique emails,
//! insertion-ordered listing, and silent success when deleting an unknown id.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use snipstash_models::{Item, ItemId, NewItem, NewUser, UserId, UserRecord};

use crate::store::{ItemStore, StoreError, UserStore};

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict("users_email_key".to_string()));
        }

        let record = UserRecord {
            id: UserId::new(),
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let item = item.into_item(ItemId::new());
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items.read().await.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let id: ItemId = id
            .parse()
            .map_err(|_| StoreError::InvalidId(id.to_string()))?;

        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut items = self.items.write().await;
        let count = items.len() as u64;
        items.clear();
        Ok(count)
    }
}

/// Store whose every operation fails as if the database were unreachable.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl UnavailableStore {
    fn error() -> StoreError {
        StoreError::Connection("connection refused".to_string())
    }
}

#[async_trait]
impl UserStore for UnavailableStore {
    async fn create(&self, _user: NewUser) -> Result<UserRecord, StoreError> {
        Err(Self::error())
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, StoreError> {
        Err(Self::error())
    }
}

#[async_trait]
impl ItemStore for UnavailableStore {
    async fn create(&self, _item: NewItem) -> Result<Item, StoreError> {
        Err(Self::error())
    }

    async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        Err(Self::error())
    }

    async fn delete_by_id(&self, _id: &str) -> Result<bool, StoreError> {
        Err(Self::error())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        Err(Self::error())
    }
}
