//! Shipped test doubles for the store and dispatcher collaborators.
//!
//! `MemoryCodeStore` honors TTLs against the tokio clock, so tests can
//! `tokio::time::pause` and `advance` to exercise expiry deterministically.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::traits::{CodeStore, SmsSender};

/// In-memory keyed expiring store.
#[derive(Default)]
pub struct MemoryCodeStore {
    entries: RwLock<HashMap<String, (String, Instant)>>,
    fail: AtomicBool,
}

impl MemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail, simulating a store outage.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Raw peek at a stored value, ignoring expiry. Test helper.
    pub async fn peek(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .await
            .get(key)
            .map(|(value, _)| value.clone())
    }
}

#[async_trait]
impl CodeStore for MemoryCodeStore {
    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<(), String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("simulated store failure".to_string());
        }
        let expires_at = Instant::now() + Duration::from_secs(ttl_secs);
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("simulated store failure".to_string());
        }
        let entries = self.entries.read().await;
        Ok(entries.get(key).and_then(|(value, expires_at)| {
            if Instant::now() < *expires_at {
                Some(value.clone())
            } else {
                None
            }
        }))
    }
}

/// A message captured by [`MockSmsSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSms {
    pub mobile: String,
    pub params: Vec<String>,
    pub template_id: String,
}

/// Recording SMS dispatcher with failure simulation.
#[derive(Default)]
pub struct MockSmsSender {
    sent: RwLock<Vec<SentSms>>,
    fail: AtomicBool,
    counter: AtomicU64,
}

impl MockSmsSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent dispatch report a provider failure.
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// All messages dispatched so far.
    pub async fn sent(&self) -> Vec<SentSms> {
        self.sent.read().await.clone()
    }

    /// The most recent message, if any.
    pub async fn last_sent(&self) -> Option<SentSms> {
        self.sent.read().await.last().cloned()
    }
}

#[async_trait]
impl SmsSender for MockSmsSender {
    async fn send_template(
        &self,
        mobile: &str,
        params: &[String],
        template_id: &str,
    ) -> Result<String, String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("simulated dispatch failure".to_string());
        }
        self.sent.write().await.push(SentSms {
            mobile: mobile.to_string(),
            params: params.to_vec(),
            template_id: template_id.to_string(),
        });
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!("mock-{id}"))
    }
}
