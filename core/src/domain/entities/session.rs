//! Session value object held in server-side session state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Identity attached to an authenticated client for the lifetime of its
/// cookie session. Created on successful login or registration; the serving
/// layer is responsible for storing it and for clearing it on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub mobile: String,
    pub nick_name: String,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            mobile: user.mobile.clone(),
            nick_name: user.nick_name.clone(),
        }
    }
}
