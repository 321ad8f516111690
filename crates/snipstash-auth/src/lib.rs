//! # Snipstash Auth
//!
//! JWT claims and token utilities for the Snipstash API.
//!
//! - [`claims`]: the [`Claims`] carried by access tokens
//! - [`jwt`]: token creation and verification
//!
//! Login issues one kind of token: an access token whose `sub` is the user
//! id, valid for one hour by default.

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
