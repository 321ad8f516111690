use tracing::{debug, error, info, instrument, warn};

use snipstash_auth::create_access_token;
use snipstash_config::JwtConfig;
use snipstash_core::{AppError, hash_password, verify_password};
use snipstash_db::{StoreError, UserStore};
use snipstash_models::{NewUser, UserRecord};

use super::model::{LoginRequest, LoginResponse, RegisterRequest, UserSummary};

/// Why a login was refused.
///
/// Only ever logged. Clients get the same `InvalidCredentials` response for
/// both cases so they cannot probe which emails are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFailure {
    UnknownEmail,
    PasswordMismatch,
}

/// Runs bcrypt off the async workers.
async fn blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(AppError::internal)?
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(users, dto), fields(user.email = %dto.email))]
    pub async fn register(
        users: &dyn UserStore,
        dto: RegisterRequest,
    ) -> Result<UserRecord, AppError> {
        let existing = users.find_by_email(&dto.email).await.map_err(|e| {
            error!(error = %e, "Store error checking for existing user");
            AppError::internal(e)
        })?;

        if existing.is_some() {
            warn!("Registration attempted with an email that is already taken");
            return Err(AppError::duplicate_email());
        }

        let password = dto.password;
        let password_hash = blocking(move || hash_password(&password)).await?;

        let user = users
            .create(NewUser {
                email: dto.email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => {
                    warn!("Concurrent registration for the same email");
                    AppError::duplicate_email()
                }
                other => {
                    error!(error = %other, "Store error creating user");
                    AppError::internal(other)
                }
            })?;

        info!(user.id = %user.id, "User registered");
        Ok(user)
    }

    #[instrument(skip(users, dto, jwt_config), fields(user.email = %dto.email))]
    pub async fn login(
        users: &dyn UserStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let Some(user) = users.find_by_email(&dto.email).await.map_err(|e| {
            error!(error = %e, "Store error looking up user");
            AppError::internal(e)
        })?
        else {
            return Err(Self::reject(CredentialFailure::UnknownEmail));
        };

        let password = dto.password;
        let hash = user.password_hash.clone();
        let is_valid = blocking(move || verify_password(&password, &hash)).await?;

        if !is_valid {
            return Err(Self::reject(CredentialFailure::PasswordMismatch));
        }

        let token = create_access_token(user.id.into_inner(), jwt_config)?;

        info!(user.id = %user.id, "User logged in");
        Ok(LoginResponse {
            token,
            user: UserSummary::from(&user),
        })
    }

    fn reject(reason: CredentialFailure) -> AppError {
        debug!(?reason, "Login rejected");
        AppError::invalid_credentials()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snipstash_auth::verify_token;
    use snipstash_core::ErrorKind;
    use snipstash_db::memory::{MemoryUserStore, UnavailableStore};

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "service-test-secret".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn register_dto(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login_dto(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_password() {
        let store = MemoryUserStore::new();

        let user = AuthService::register(&store, register_dto("a@b.com", "pw"))
            .await
            .unwrap();

        assert_ne!(user.password_hash, "pw");
        assert!(verify_password("pw", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let store = MemoryUserStore::new();
        AuthService::register(&store, register_dto("a@b.com", "pw"))
            .await
            .unwrap();

        let err = AuthService::register(&store, register_dto("a@b.com", "other"))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::DuplicateEmail);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_login_issues_token_for_user() {
        let store = MemoryUserStore::new();
        let config = jwt_config();
        let user = AuthService::register(&store, register_dto("a@b.com", "pw"))
            .await
            .unwrap();

        let response = AuthService::login(&store, login_dto("a@b.com", "pw"), &config)
            .await
            .unwrap();

        assert_eq!(response.user.id, user.id);
        assert_eq!(response.user.email, "a@b.com");
        let claims = verify_token(&response.token, &config).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let store = MemoryUserStore::new();
        let config = jwt_config();
        AuthService::register(&store, register_dto("a@b.com", "pw"))
            .await
            .unwrap();

        let unknown = AuthService::login(&store, login_dto("x@y.com", "pw"), &config)
            .await
            .unwrap_err();
        let mismatch = AuthService::login(&store, login_dto("a@b.com", "wrong"), &config)
            .await
            .unwrap_err();

        assert_eq!(unknown.kind, ErrorKind::InvalidCredentials);
        assert_eq!(mismatch.kind, ErrorKind::InvalidCredentials);
        assert_eq!(unknown.status, mismatch.status);
        assert_eq!(unknown.message(), mismatch.message());
    }

    #[tokio::test]
    async fn test_store_fault_is_internal() {
        let err = AuthService::register(&UnavailableStore, register_dto("a@b.com", "pw"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InternalError);

        let err = AuthService::login(&UnavailableStore, login_dto("a@b.com", "pw"), &jwt_config())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InternalError);
    }
}
