//! Traits for the store and dispatcher collaborators

use async_trait::async_trait;

/// Keyed expiring store: string keys to string values with a per-key TTL.
///
/// Implementations must provide atomic get/set semantics under concurrent
/// access; the coordinator performs no locking of its own. Two concurrent
/// writers for the same key race harmlessly, last writer wins.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Store a value under `key`, replacing any previous value, expiring
    /// after `ttl_secs` seconds.
    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), String>;

    /// Fetch the value under `key`; `None` means expired or never set.
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
}

/// SMS dispatcher: delivers a templated message to a phone number.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send a template SMS. `params` fills the template slots in order.
    /// Returns the provider's message id on success.
    async fn send_template(
        &self,
        mobile: &str,
        params: &[String],
        template_id: &str,
    ) -> Result<String, String>;
}
