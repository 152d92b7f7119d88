//! Logging SMS dispatcher for local development.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::info;

use portal_core::services::SmsSender;
use portal_shared::utils::phone::mask_mobile;

/// Logs each message instead of dispatching it. Selected automatically when
/// no provider credentials are configured, so the full flow works against a
/// local stack.
#[derive(Default)]
pub struct MockSmsSender {
    counter: AtomicU64,
}

impl MockSmsSender {
    pub fn new() -> Self {
        Self::default()
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
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        info!(
            mobile = %mask_mobile(mobile),
            template_id,
            ?params,
            "mock sms dispatch (not sent)"
        );
        Ok(format!("mock-sms-{id}"))
    }
}
