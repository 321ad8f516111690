use crate::EnvLookup;

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Default level for this application's targets when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for the daily-rolling JSON log. Console only when `None`.
    pub dir: Option<String>,
}

impl LoggingConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            dir: lookup("LOG_DIR").filter(|s| !s.is_empty()),
        }
    }
}
