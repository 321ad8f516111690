//! Database connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string. Optional here: when it is
//!   missing the pool falls back to libpq defaults and the problem is logged
//!   at startup instead of aborting the process.
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default 10; zero falls back)
//! - `RUN_MIGRATIONS`: apply embedded migrations at startup (default true)

use crate::{EnvLookup, parse_bool_or, parse_or};

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&crate::process_env)
    }

    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            url: lookup("DATABASE_URL").filter(|s| !s.trim().is_empty()),
            max_connections: Some(parse_or(
                lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            ))
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            run_migrations: parse_bool_or(lookup, "RUN_MIGRATIONS", true),
        }
    }
}
