//! Template SMS provider client.
//!
//! Sends one request per dispatch with a bounded timeout and no retries; a
//! provider failure surfaces immediately so the caller never stores a code
//! for a message that was not accepted.

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use portal_core::services::SmsSender;
use portal_shared::config::SmsConfig;
use portal_shared::utils::phone::mask_mobile;

use crate::InfrastructureError;

/// Provider status code meaning the message was accepted.
const PROVIDER_OK: &str = "000000";

#[derive(Serialize)]
struct TemplateSmsRequest<'a> {
    to: &'a str,
    #[serde(rename = "appId")]
    app_id: &'a str,
    #[serde(rename = "templateId")]
    template_id: &'a str,
    datas: &'a [String],
}

#[derive(Deserialize)]
struct TemplateSmsResponse {
    #[serde(rename = "statusCode")]
    status_code: String,
    #[serde(rename = "statusMsg", default)]
    status_msg: Option<String>,
    #[serde(rename = "smsMessageSid", default)]
    sms_message_sid: Option<String>,
}

/// HTTP client for the template-SMS provider.
pub struct TemplateSmsSender {
    client: reqwest::Client,
    config: SmsConfig,
}

impl TemplateSmsSender {
    pub fn new(config: SmsConfig) -> Result<Self, InfrastructureError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "sms provider credentials are not configured".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Config(format!("http client: {e}")))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/2013-12-26/Accounts/{}/SMS/TemplateSMS",
            self.config.base_url, self.config.account_sid
        )
    }

    fn auth_header(&self) -> String {
        let raw = format!("{}:{}", self.config.account_sid, self.config.auth_token);
        BASE64.encode(raw.as_bytes())
    }
}

#[async_trait]
impl SmsSender for TemplateSmsSender {
    async fn send_template(
        &self,
        mobile: &str,
        params: &[String],
        template_id: &str,
    ) -> Result<String, String> {
        let body = TemplateSmsRequest {
            to: mobile,
            app_id: &self.config.app_id,
            template_id,
            datas: params,
        };

        debug!(mobile = %mask_mobile(mobile), template_id, "dispatching template sms");

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(mobile = %mask_mobile(mobile), error = %e, "sms request failed");
                format!("sms request failed: {e}")
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(mobile = %mask_mobile(mobile), %status, "sms provider returned http error");
            return Err(format!("sms provider returned {status}"));
        }

        let parsed: TemplateSmsResponse = response.json().await.map_err(|e| {
            error!(mobile = %mask_mobile(mobile), error = %e, "unreadable provider response");
            format!("unreadable provider response: {e}")
        })?;

        if parsed.status_code != PROVIDER_OK {
            let msg = parsed.status_msg.unwrap_or_default();
            error!(
                mobile = %mask_mobile(mobile),
                code = %parsed.status_code,
                msg = %msg,
                "sms provider rejected message"
            );
            return Err(format!(
                "provider rejected message: {} {}",
                parsed.status_code, msg
            ));
        }

        let sid = parsed.sms_message_sid.unwrap_or_default();
        info!(mobile = %mask_mobile(mobile), sid = %sid, "sms accepted by provider");
        Ok(sid)
    }
}
