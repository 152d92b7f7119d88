//! Redis-backed implementation of the core `CodeStore` seam.

use async_trait::async_trait;

use portal_core::services::CodeStore;

use super::RedisClient;

/// Stores challenge codes in Redis with per-key TTLs. Expiry is entirely
/// Redis-side; an expired key simply reads back as absent.
#[derive(Clone)]
pub struct RedisCodeStore {
    client: RedisClient,
}

impl RedisCodeStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), String> {
        self.client
            .set_with_expiry(key, value, ttl_secs)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.client.get(key).await.map_err(|e| e.to_string())
    }
}
