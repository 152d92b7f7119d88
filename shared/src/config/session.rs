//! Cookie session configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Signing key for the cookie session store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Secret used to sign session cookies; must be at least 32 bytes,
    /// checked at startup. The development default is NOT suitable for
    /// production.
    pub secret_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret_key: "dev-only-session-secret-change-me-0123456789abcdef0123456789abcdef"
                .to_string(),
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            secret_key: env_or(
                "SESSION_SECRET_KEY",
                "dev-only-session-secret-change-me-0123456789abcdef0123456789abcdef",
            ),
        }
    }
}
