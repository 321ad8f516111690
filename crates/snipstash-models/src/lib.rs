//! # Snipstash Models
//!
//! Domain models and DTOs shared by the API and the admin CLI.
//!
//! # Modules
//!
//! - [`auth`]: register/login requests and responses
//! - [`ids`]: strongly-typed [`UserId`] and [`ItemId`]
//! - [`items`]: loosely-typed snippet items
//! - [`users`]: stored user records and their public summary

pub mod auth;
pub mod ids;
pub mod items;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
pub use ids::{ItemId, UserId};
pub use items::{Item, NewItem, RESERVED_FIELDS};
pub use users::{NewUser, UserRecord, UserSummary};
