use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    /// `tracing` filter used when neither `RUST_LOG` nor
    /// `TRENDTRACKR_LOG_LEVEL` is set.
    #[must_use]
    pub fn default_log_level(self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Test => "warn",
            Environment::Production => "info",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Fallback `tracing` filter directive when `RUST_LOG` is unset.
    pub log_level: String,
    /// Directory (or single file) holding saved upstream payloads.
    pub data_dir: PathBuf,
    pub cache_ttl_secs: u64,
    /// Maximum number of queries held by the fetch cache.
    pub cache_capacity: usize,
    pub histogram_bins: usize,
}

impl AppConfig {
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
