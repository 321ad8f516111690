//! # Snipstash DB
//!
//! Connection pool, migrations, and store adapters for the Snipstash API.
//!
//! - [`store`]: the [`UserStore`] / [`ItemStore`] contracts and [`StoreError`]
//! - [`postgres`]: PostgreSQL adapters over a `sqlx` pool
//! - `memory` (feature `test-utils`): in-memory adapters for tests
//!
//! # Startup behaviour
//!
//! [`init_db_pool`] never fails. The pool connects lazily, so a database
//! that is down at startup only makes individual requests fail. Call
//! [`check_connection`] to log whether the database is reachable.
//!
//! ```ignore
//! use snipstash_db::{check_connection, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&config.database);
//! if check_connection(&pool).await && config.database.run_migrations {
//!     run_migrations(&pool).await;
//! }
//! ```

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::{error, info, warn};

use snipstash_config::DatabaseConfig;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;
pub mod store;

// Re-export commonly used types at crate root
pub use postgres::{PgItemStore, PgUserStore};
pub use sqlx::PgPool;
pub use store::{ItemStore, StoreError, UserStore};

/// Embedded migrations from the workspace `migrations/` directory.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Creates a lazily-connecting PostgreSQL pool.
///
/// A missing or unparsable `DATABASE_URL` is logged and the pool falls back
/// to libpq defaults (`PGHOST`, `PGUSER`, ... or localhost).
pub fn init_db_pool(config: &DatabaseConfig) -> PgPool {
    let options = match config.url.as_deref() {
        Some(url) => url.parse::<PgConnectOptions>().unwrap_or_else(|e| {
            error!(error = %e, "DATABASE_URL is not a valid connection string; using defaults");
            PgConnectOptions::new()
        }),
        None => {
            warn!("DATABASE_URL is not set; using PostgreSQL defaults");
            PgConnectOptions::new()
        }
    };

    pool_options(config).connect_lazy_with(options)
}

/// Pool settings shared by the server and the CLI.
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new().max_connections(config.max_connections)
}

/// Pings the database once and logs the outcome.
pub async fn check_connection(pool: &PgPool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => {
            info!("Connected to database");
            true
        }
        Err(e) => {
            error!(error = %e, "Database connection error; requests will fail until it is reachable");
            false
        }
    }
}

/// Applies pending migrations, logging instead of failing.
pub async fn run_migrations(pool: &PgPool) -> bool {
    match MIGRATOR.run(pool).await {
        Ok(()) => {
            info!("Database migrations applied");
            true
        }
        Err(e) => {
            error!(error = %e, "Failed to apply database migrations");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_options_use_configured_size() {
        let config = DatabaseConfig {
            url: None,
            max_connections: 3,
            run_migrations: false,
        };

        assert_eq!(pool_options(&config).get_max_connections(), 3);
    }
}
