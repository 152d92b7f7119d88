//! User entity representing a registered portal user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user, uniquely identified by mobile number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Mobile number; unique across users
    pub mobile: String,

    /// Display name; defaults to the mobile number at registration
    pub nick_name: String,

    /// Bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp of the user's last login
    pub last_login: DateTime<Utc>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user. No nickname is collected at registration, so the
    /// mobile number doubles as the display name. `last_login` starts at the
    /// creation instant because registration logs the user in.
    pub fn new(mobile: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            nick_name: mobile.clone(),
            mobile,
            password_hash,
            last_login: now,
            created_at: now,
        }
    }

    /// Updates the last login timestamp to now.
    pub fn touch_last_login(&mut self) {
        self.last_login = Utc::now();
    }
}
