//! Configuration module with business-specific sub-modules
//!
//! Each sub-module owns one concern:
//! - `server` - HTTP bind address
//! - `database` - MySQL connection and pool settings
//! - `cache` - Redis connection and operation timeout
//! - `sms` - Template-SMS provider credentials
//! - `verification` - Challenge code TTLs and SMS template id
//! - `session` - Cookie session signing key
//!
//! Every struct has sensible development defaults and a `from_env` constructor
//! that reads overrides from the process environment.

pub mod cache;
pub mod database;
pub mod server;
pub mod session;
pub mod sms;
pub mod verification;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;
pub use sms::SmsConfig;
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub sms: SmsConfig,
    pub verification: VerificationConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load the full configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            sms: SmsConfig::from_env(),
            verification: VerificationConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}

/// Read an environment variable, falling back to a default.
pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back to a default on
/// absence or parse failure.
pub(crate) fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
