//! Main verification coordinator implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, error, warn};

use portal_shared::config::VerificationConfig;
use portal_shared::utils::phone::{is_valid_mobile, mask_mobile};

use crate::errors::{AuthError, AuthResult};
use crate::services::captcha::CaptchaGenerator;

use super::traits::{CodeStore, SmsSender};

/// Store key prefix for image challenge codes.
const IMAGE_CODE_KEY_PREFIX: &str = "ImageCodeId_";

/// Store key prefix for SMS one-time codes.
const SMS_CODE_KEY_PREFIX: &str = "SMS_";

/// Coordinates the verification-code lifecycle.
///
/// A challenge moves through `Unissued -> Issued(text, expiry)` and then
/// either lapses or verifies. Verification does not remove the stored code:
/// a correct submission keeps succeeding until the TTL elapses. Hardening
/// to delete-on-success would be a single `delete` call after the
/// successful compare.
pub struct VerificationService<S: SmsSender, C: CodeStore> {
    sms: Arc<S>,
    store: Arc<C>,
    captcha: CaptchaGenerator,
    config: VerificationConfig,
}

impl<S: SmsSender, C: CodeStore> VerificationService<S, C> {
    pub fn new(sms: Arc<S>, store: Arc<C>, config: VerificationConfig) -> Self {
        Self {
            sms,
            store,
            captcha: CaptchaGenerator::new(),
            config,
        }
    }

    /// Issue a visual challenge for an opaque client-supplied id.
    ///
    /// The challenge text is stored under the id with the image-code TTL,
    /// overwriting any pending challenge for the same id. The rendered image
    /// is returned for direct transmission and never persisted.
    pub async fn issue_image_challenge(&self, image_code_id: &str) -> AuthResult<Vec<u8>> {
        if image_code_id.is_empty() {
            return Err(AuthError::invalid("image_code_id"));
        }

        let captcha = self.captcha.generate();

        let key = Self::image_code_key(image_code_id);
        self.store
            .set(&key, &captcha.text, self.config.image_code_ttl_secs)
            .await
            .map_err(|e| {
                error!(image_code_id, error = %e, "failed to store image challenge");
                AuthError::storage(e)
            })?;

        debug!(image_code_id, text = %captcha.text, "issued image challenge");

        Ok(captcha.image)
    }

    /// Validate a typed image code and dispatch an SMS one-time code.
    ///
    /// The SMS code is stored only after the dispatcher confirms delivery,
    /// so a retrievable code always implies a sent SMS. The inverse does not
    /// hold: if the store write fails after dispatch the code was sent but
    /// is unrecorded, surfaces as [`AuthError::Storage`], and the user must
    /// request a fresh code.
    pub async fn send_sms_challenge(
        &self,
        mobile: &str,
        image_code: &str,
        image_code_id: &str,
    ) -> AuthResult<()> {
        if mobile.is_empty() {
            return Err(AuthError::invalid("mobile"));
        }
        if image_code.is_empty() {
            return Err(AuthError::invalid("image_code"));
        }
        if image_code_id.is_empty() {
            return Err(AuthError::invalid("image_code_id"));
        }
        if !is_valid_mobile(mobile) {
            return Err(AuthError::invalid("mobile"));
        }

        let image_key = Self::image_code_key(image_code_id);
        let stored = self
            .store
            .get(&image_key)
            .await
            .map_err(|e| {
                error!(image_code_id, error = %e, "image challenge lookup failed");
                AuthError::storage(e)
            })?
            .ok_or(AuthError::ChallengeExpired)?;

        // Image codes compare case-insensitively.
        if !stored.eq_ignore_ascii_case(image_code) {
            warn!(
                mobile = %mask_mobile(mobile),
                image_code_id,
                "image challenge mismatch"
            );
            return Err(AuthError::ChallengeMismatch);
        }

        let code = Self::generate_sms_code();
        debug!(mobile = %mask_mobile(mobile), code = %code, "generated sms code");

        // The user-facing message quotes a shortened validity window, TTL/5.
        let display_validity = self.config.sms_code_ttl_secs / 5;
        let params = [code.clone(), display_validity.to_string()];

        self.sms
            .send_template(mobile, &params, &self.config.sms_template_id)
            .await
            .map_err(|e| {
                error!(mobile = %mask_mobile(mobile), error = %e, "sms dispatch failed");
                AuthError::Dispatch { message: e }
            })?;

        let sms_key = Self::sms_code_key(mobile);
        self.store
            .set(&sms_key, &code, self.config.sms_code_ttl_secs)
            .await
            .map_err(|e| {
                // Residual race: the SMS went out but the code is unrecorded.
                warn!(
                    mobile = %mask_mobile(mobile),
                    error = %e,
                    "sms code sent but not recorded"
                );
                AuthError::storage(e)
            })?;

        Ok(())
    }

    /// Validate a submitted SMS one-time code.
    ///
    /// Absence in the store means expired or never issued; the two are not
    /// distinguished. The comparison is exact and constant-time, so an
    /// unpadded `"42917"` never matches a stored `"042917"`. The stored code
    /// is left in place until its TTL lapses (see the type-level docs).
    pub async fn verify_sms_challenge(&self, mobile: &str, code: &str) -> AuthResult<()> {
        if mobile.is_empty() {
            return Err(AuthError::invalid("mobile"));
        }
        if code.is_empty() {
            return Err(AuthError::invalid("sms_code"));
        }

        let key = Self::sms_code_key(mobile);
        let stored = self
            .store
            .get(&key)
            .await
            .map_err(|e| {
                error!(mobile = %mask_mobile(mobile), error = %e, "sms code lookup failed");
                AuthError::storage(e)
            })?
            .ok_or(AuthError::ChallengeExpired)?;

        if stored.len() != code.len() || !constant_time_eq(stored.as_bytes(), code.as_bytes()) {
            warn!(mobile = %mask_mobile(mobile), "sms code mismatch");
            return Err(AuthError::ChallengeMismatch);
        }

        Ok(())
    }

    /// Generate a zero-padded 6-digit code in 000000..=999999 from the OS
    /// CSPRNG. The modulo bias is negligible at this range.
    fn generate_sms_code() -> String {
        let mut bytes = [0u8; 4];
        OsRng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes) % 1_000_000;
        format!("{:06}", num)
    }

    fn image_code_key(image_code_id: &str) -> String {
        format!("{IMAGE_CODE_KEY_PREFIX}{image_code_id}")
    }

    fn sms_code_key(mobile: &str) -> String {
        format!("{SMS_CODE_KEY_PREFIX}{mobile}")
    }
}
