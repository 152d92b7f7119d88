//! MySQL persistence via SQLx.

pub mod mysql;

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

use portal_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create the shared connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await?;

    info!(max_connections = config.max_connections, "mysql pool created");
    Ok(pool)
}
