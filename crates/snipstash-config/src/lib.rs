//! # Snipstash Config
//!
//! Configuration for the Snipstash API, read from the environment once at
//! process start and then passed explicitly to whatever needs it.
//!
//! - [`server`]: listen address (`HOST`, `PORT`)
//! - [`database`]: PostgreSQL connection (`DATABASE_URL`, ...)
//! - [`jwt`]: token signing (`JWT_SECRET`, `JWT_ACCESS_EXPIRY`)
//! - [`logging`]: log level and optional file output
//!
//! # Example
//!
//! ```ignore
//! use snipstash_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env();
//! let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
//! ```

use std::str::FromStr;

pub mod database;
pub mod jwt;
pub mod logging;
pub mod server;

// Re-export commonly used types at crate root
pub use database::{DEFAULT_MAX_CONNECTIONS, DatabaseConfig};
pub use jwt::{DEFAULT_ACCESS_TOKEN_EXPIRY, INSECURE_DEFAULT_SECRET, JwtConfig};
pub use logging::LoggingConfig;
pub use server::ServerConfig;

/// Variable lookup used by every `from_lookup` constructor.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parses `key`, falling back to `default` when unset or unparsable.
fn parse_or<T: FromStr>(lookup: EnvLookup<'_>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn parse_bool_or(lookup: EnvLookup<'_>, key: &str, default: bool) -> bool {
    match lookup(key).map(|v| v.trim().to_lowercase()) {
        Some(v) if v == "true" || v == "1" => true,
        Some(v) if v == "false" || v == "0" => false,
        _ => default,
    }
}

/// Complete process configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            server: ServerConfig::from_lookup(lookup),
            database: DatabaseConfig::from_lookup(lookup),
            jwt: JwtConfig::from_lookup(lookup),
            logging: LoggingConfig::from_lookup(lookup),
        }
    }
}
