//! JWT (JSON Web Token) creation and verification.
//!
//! Tokens are HS256-signed with [`JwtConfig::secret`] and expire
//! [`JwtConfig::access_token_expiry`] seconds after issuance.
//!
//! # Example
//!
//! ```ignore
//! use snipstash_auth::{create_access_token, verify_token};
//! use snipstash_config::JwtConfig;
//!
//! let token = create_access_token(user_id, &jwt_config)?;
//! let claims = verify_token(&token, &jwt_config)?;
//! assert_eq!(claims.sub, user_id.to_string());
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use snipstash_config::JwtConfig;
use snipstash_core::AppError;

use crate::claims::Claims;

/// Creates an access token whose subject is `user_id`.
///
/// # Errors
///
/// Returns an internal error if the expiry is not a positive number of
/// seconds or encoding fails.
pub fn create_access_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now
        .checked_add(jwt_config.access_token_expiry)
        .filter(|exp| *exp > now)
        .ok_or_else(|| {
            AppError::internal(anyhow::anyhow!(
                "Invalid access token expiry: {}",
                jwt_config.access_token_expiry
            ))
        })?;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: exp as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
///
/// No route requires a token; item endpoints stay open.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid or expired token: {}", e)))
}
