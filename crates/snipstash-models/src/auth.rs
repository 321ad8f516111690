//! Authentication request and response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::users::UserSummary;

/// Registration request.
///
/// Any non-empty email string is accepted; there is no format check.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "a@b.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "pw")]
    pub password: String,
}

/// Login request with email and password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "a@b.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "pw")]
    pub password: String,
}

/// Successful login: a signed token and the user it was issued to.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Generic success message response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let request = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_accepts_unformatted_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "pw".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_empty_password() {
        let request = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_empty_email() {
        let request = LoginRequest {
            email: "".to_string(),
            password: "pw".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let result: Result<LoginRequest, _> = serde_json::from_str(r#"{"email":"a@b.com"}"#);
        assert!(result.is_err());
    }
}
