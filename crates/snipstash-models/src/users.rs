//! User records.
//!
//! [`UserRecord`] is the stored row and includes the bcrypt hash; it never
//! implements `Serialize`. Responses carry a [`UserSummary`] instead.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::ids::UserId;

/// A user as persisted in the credential store.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user. `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

/// Public view of a user returned by login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserSummary {
    #[schema(example = "a@b.com")]
    pub email: String,
    pub id: UserId,
}

impl From<&UserRecord> for UserSummary {
    fn from(record: &UserRecord) -> Self {
        Self {
            email: record.email.clone(),
            id: record.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_omits_password_hash() {
        let record = UserRecord {
            id: UserId::new(),
            email: "a@b.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(UserSummary::from(&record)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["email"], "a@b.com");
        assert_eq!(object["id"], record.id.to_string());
    }
}
