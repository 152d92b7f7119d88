//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::AuthError;

use super::trait_::UserRepository;

/// In-memory user repository for tests and local development.
#[derive(Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    fail_updates: bool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A variant whose `update_last_login` always fails, for exercising the
    /// best-effort login path.
    pub fn with_failing_updates() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            fail_updates: true,
        }
    }

    /// Number of stored users.
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.mobile == mobile).cloned())
    }

    async fn create(&self, user: User) -> Result<User, AuthError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.mobile == user.mobile) {
            return Err(AuthError::DuplicateUser);
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_last_login(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), AuthError> {
        if self.fail_updates {
            return Err(AuthError::storage("simulated update failure"));
        }

        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.last_login = at;
                Ok(())
            }
            None => Err(AuthError::UserNotFound),
        }
    }
}
