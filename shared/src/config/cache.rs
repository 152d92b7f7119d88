//! Redis cache configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// Redis connection settings for the keyed expiring store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,
    /// Per-operation timeout in seconds; an operation that exceeds it is
    /// reported as failed, never retried
    pub operation_timeout_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            operation_timeout_secs: 3,
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            url: env_or("REDIS_URL", "redis://127.0.0.1:6379"),
            operation_timeout_secs: env_parse_or("REDIS_OPERATION_TIMEOUT_SECS", 3),
        }
    }
}
