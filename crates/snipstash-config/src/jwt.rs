use crate::{EnvLookup, parse_or};

/// Signing secret used when `JWT_SECRET` is not set.
///
/// Anyone who knows this value can mint tokens. It is kept only so a fresh
/// checkout runs without setup; production deployments must set `JWT_SECRET`.
pub const INSECURE_DEFAULT_SECRET: &str = "salainenavain123";

/// Access tokens live for one hour unless overridden.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            secret: lookup("JWT_SECRET")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| INSECURE_DEFAULT_SECRET.to_string()),
            access_token_expiry: Some(parse_or(
                lookup,
                "JWT_ACCESS_EXPIRY",
                DEFAULT_ACCESS_TOKEN_EXPIRY,
            ))
            .filter(|expiry| *expiry > 0)
            .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY),
        }
    }

    /// True when the hard-coded fallback secret is in use.
    pub fn uses_insecure_default(&self) -> bool {
        self.secret == INSECURE_DEFAULT_SECRET
    }
}
