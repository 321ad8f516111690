//! Direct user creation.
//!
//! Applies the same rules as `POST /api/register`: non-empty email and
//! password, unique email, bcrypt hash at the API's cost.

use thiserror::Error;

use snipstash_core::hash_password;
use snipstash_db::{StoreError, UserStore};
use snipstash_models::{NewUser, UserRecord};

#[derive(Debug, Error)]
pub enum CreateUserError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Email already exists")]
    AlreadyExists,

    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error(transparent)]
    Store(StoreError),
}

pub async fn create_user(
    store: &dyn UserStore,
    email: &str,
    password: &str,
) -> Result<UserRecord, CreateUserError> {
    if email.is_empty() {
        return Err(CreateUserError::MissingField("email"));
    }
    if password.is_empty() {
        return Err(CreateUserError::MissingField("password"));
    }

    if store
        .find_by_email(email)
        .await
        .map_err(CreateUserError::Store)?
        .is_some()
    {
        return Err(CreateUserError::AlreadyExists);
    }

    let password_hash = hash_password(password).map_err(|e| CreateUserError::Hash(e.message()))?;

    store
        .create(NewUser {
            email: email.to_string(),
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::Conflict(_) => CreateUserError::AlreadyExists,
            other => CreateUserError::Store(other),
        })
}
