use std::fmt;
use std::sync::Arc;

use snipstash_config::JwtConfig;
use snipstash_db::{ItemStore, PgItemStore, PgPool, PgUserStore, UserStore};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub items: Arc<dyn ItemStore>,
    pub jwt_config: JwtConfig,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        items: Arc<dyn ItemStore>,
        jwt_config: JwtConfig,
    ) -> Self {
        Self {
            users,
            items,
            jwt_config,
        }
    }

    /// State backed by PostgreSQL stores sharing one pool.
    pub fn with_pool(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self::new(
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgItemStore::new(pool)),
            jwt_config,
        )
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("access_token_expiry", &self.jwt_config.access_token_expiry)
            .finish_non_exhaustive()
    }
}
