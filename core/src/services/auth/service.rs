//! Authentication service implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use portal_shared::utils::phone::{is_valid_mobile, mask_mobile};

use crate::domain::entities::{Session, User};
use crate::errors::{AuthError, AuthResult};
use crate::repositories::UserRepository;
use crate::services::verification::{CodeStore, SmsSender, VerificationService};

/// Handles the transition from "unauthenticated" to "authenticated session".
///
/// Registration requires a valid SMS one-time code; login checks the bcrypt
/// password hash. Both return a [`Session`] the serving layer attaches to the
/// client's cookie session.
pub struct AuthService<U: UserRepository, S: SmsSender, C: CodeStore> {
    users: Arc<U>,
    verification: Arc<VerificationService<S, C>>,
}

impl<U: UserRepository, S: SmsSender, C: CodeStore> AuthService<U, S, C> {
    pub fn new(users: Arc<U>, verification: Arc<VerificationService<S, C>>) -> Self {
        Self { users, verification }
    }

    /// Register a new user after validating their SMS one-time code.
    ///
    /// No nickname is collected; the mobile number doubles as the display
    /// name. A duplicate mobile fails with [`AuthError::DuplicateUser`] and
    /// writes nothing.
    pub async fn register(
        &self,
        mobile: &str,
        sms_code: &str,
        password: &str,
    ) -> AuthResult<Session> {
        if mobile.is_empty() {
            return Err(AuthError::invalid("mobile"));
        }
        if sms_code.is_empty() {
            return Err(AuthError::invalid("smscode"));
        }
        if password.is_empty() {
            return Err(AuthError::invalid("password"));
        }
        if !is_valid_mobile(mobile) {
            return Err(AuthError::invalid("mobile"));
        }

        self.verification.verify_sms_challenge(mobile, sms_code).await?;

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AuthError::Internal {
                message: format!("password hashing failed: {e}"),
            })?;

        let user = self.users.create(User::new(mobile.to_string(), password_hash)).await?;

        info!(mobile = %mask_mobile(mobile), user_id = %user.id, "user registered");

        Ok(Session::from(&user))
    }

    /// Authenticate an existing user by mobile number and password.
    ///
    /// The last-login timestamp update is best-effort: a failure there is
    /// logged and the login still succeeds.
    pub async fn login(&self, mobile: &str, password: &str) -> AuthResult<Session> {
        if mobile.is_empty() {
            return Err(AuthError::invalid("mobile"));
        }
        if password.is_empty() {
            return Err(AuthError::invalid("password"));
        }

        let user = self
            .users
            .find_by_mobile(mobile)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AuthError::Internal {
                message: format!("password verification failed: {e}"),
            })?;
        if !matches {
            warn!(mobile = %mask_mobile(mobile), "wrong password");
            return Err(AuthError::CredentialError);
        }

        if let Err(e) = self.users.update_last_login(user.id, Utc::now()).await {
            warn!(
                mobile = %mask_mobile(mobile),
                error = %e,
                "last-login update failed, continuing"
            );
        }

        info!(mobile = %mask_mobile(mobile), user_id = %user.id, "user logged in");

        Ok(Session::from(&user))
    }
}
