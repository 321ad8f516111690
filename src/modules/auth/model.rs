//! Authentication data models and DTOs.
//!
//! Re-exports the request/response types from the `snipstash-models` crate.

pub use snipstash_models::auth::*;
pub use snipstash_models::users::UserSummary;
