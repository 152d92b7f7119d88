//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::AuthError;

/// Repository contract for [`User`] persistence.
///
/// The backing store enforces mobile-number uniqueness; `create` surfaces a
/// violation as [`AuthError::DuplicateUser`] without a partial write.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by mobile number.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - user found
    /// * `Ok(None)` - no user with that mobile
    /// * `Err(AuthError::Storage)` - query failed
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, AuthError>;

    /// Persist a new user.
    ///
    /// # Returns
    /// * `Ok(User)` - the created user
    /// * `Err(AuthError::DuplicateUser)` - mobile already registered
    /// * `Err(AuthError::Storage)` - write failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Record a login timestamp for an existing user.
    ///
    /// Callers may treat a failure here as non-fatal; see the login flow.
    async fn update_last_login(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), AuthError>;
}
