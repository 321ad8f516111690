//! Database seeding and account management.
//!
//! - [`items`]: fake item generation and batch insertion
//! - [`users`]: direct user creation with the API's registration rules

pub mod items;
pub mod users;

pub use items::{ItemSeedConfig, clear_items, generate_items, seed_items};
pub use users::{CreateUserError, create_user};
