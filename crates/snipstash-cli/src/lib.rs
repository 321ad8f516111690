//! # Snipstash CLI
//!
//! Administrative and seeding utilities for Snipstash development.
//!
//! This library crate provides the functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use snipstash_cli::seeder::{seed_items, ItemSeedConfig};
//!
//! seed_items(&pool, ItemSeedConfig::new(50)).await?;
//! ```

pub mod seeder;
