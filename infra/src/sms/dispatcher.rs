//! Provider selection.

use async_trait::async_trait;
use tracing::info;

use portal_core::services::SmsSender;
use portal_shared::config::SmsConfig;

use crate::InfrastructureError;

use super::{MockSmsSender, TemplateSmsSender};

/// The configured dispatcher: the real provider when credentials are set,
/// the logging mock otherwise. A single concrete type so the services can
/// stay generic without boxing.
pub enum SmsDispatcher {
    Template(TemplateSmsSender),
    Mock(MockSmsSender),
}

impl SmsDispatcher {
    pub fn from_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        if config.use_mock {
            info!("sms dispatch: using logging mock (no provider credentials)");
            Ok(Self::Mock(MockSmsSender::new()))
        } else {
            info!("sms dispatch: using template-sms provider");
            Ok(Self::Template(TemplateSmsSender::new(config.clone())?))
        }
    }
}

#[async_trait]
impl SmsSender for SmsDispatcher {
    async fn send_template(
        &self,
        mobile: &str,
        params: &[String],
        template_id: &str,
    ) -> Result<String, String> {
        match self {
            Self::Template(sender) => sender.send_template(mobile, params, template_id).await,
            Self::Mock(sender) => sender.send_template(mobile, params, template_id).await,
        }
    }
}
