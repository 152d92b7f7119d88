//! MySQL database configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// Database connection and pool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MySQL connection URL
    pub url: String,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Connection acquire timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mysql://localhost:3306/news_portal".to_string(),
            max_connections: 10,
            connect_timeout_secs: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env_or("DATABASE_URL", "mysql://localhost:3306/news_portal"),
            max_connections: env_parse_or("DATABASE_MAX_CONNECTIONS", 10),
            connect_timeout_secs: env_parse_or("DATABASE_CONNECT_TIMEOUT_SECS", 5),
        }
    }
}
