//! Verification challenge configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// TTLs and template id for the challenge-code lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Seconds an image challenge code stays valid
    pub image_code_ttl_secs: u64,
    /// Seconds an SMS one-time code stays valid
    pub sms_code_ttl_secs: u64,
    /// Provider-side SMS template id
    pub sms_template_id: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            image_code_ttl_secs: 180,
            sms_code_ttl_secs: 300,
            sms_template_id: "1".to_string(),
        }
    }
}

impl VerificationConfig {
    pub fn from_env() -> Self {
        Self {
            image_code_ttl_secs: env_parse_or("IMAGE_CODE_TTL_SECS", 180),
            sms_code_ttl_secs: env_parse_or("SMS_CODE_TTL_SECS", 300),
            sms_template_id: env_or("SMS_TEMPLATE_ID", "1"),
        }
    }
}
