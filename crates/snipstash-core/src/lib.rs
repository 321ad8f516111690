//! # Snipstash Core
//!
//! Core types shared by every Snipstash crate:
//!
//! - [`errors`]: the [`AppError`] type and its [`ErrorKind`] taxonomy
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use snipstash_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("secure_password")?;
//! if !verify_password("secure_password", &hash)? {
//!     return Err(AppError::invalid_credentials());
//! }
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind, ErrorResponse};
pub use password::{HASH_COST, hash_password, verify_password};
