//! Template-SMS provider configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// Credentials and endpoint for the template-SMS provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    /// Provider REST base URL
    pub base_url: String,
    /// Account identifier
    pub account_sid: String,
    /// Account auth token
    pub auth_token: String,
    /// Application identifier at the provider
    pub app_id: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Use the logging mock dispatcher instead of the real provider
    pub use_mock: bool,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://app.cloopen.com:8883".to_string(),
            account_sid: String::new(),
            auth_token: String::new(),
            app_id: String::new(),
            request_timeout_secs: 5,
            use_mock: true,
        }
    }
}

impl SmsConfig {
    pub fn from_env() -> Self {
        let account_sid = env_or("SMS_ACCOUNT_SID", "");
        // Without credentials the mock dispatcher is the only option.
        let use_mock = account_sid.is_empty() || env_parse_or("SMS_USE_MOCK", false);
        Self {
            base_url: env_or("SMS_BASE_URL", "https://app.cloopen.com:8883"),
            account_sid,
            auth_token: env_or("SMS_AUTH_TOKEN", ""),
            app_id: env_or("SMS_APP_ID", ""),
            request_timeout_secs: env_parse_or("SMS_REQUEST_TIMEOUT_SECS", 5),
            use_mock,
        }
    }
}
