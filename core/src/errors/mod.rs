//! Error taxonomy for the verification and session core.
//!
//! Every collaborator failure (store, dispatcher, user store) is converted
//! into one of these variants at the service boundary; raw errors never
//! cross into the HTTP layer. The API maps each variant to a stable errno.

use thiserror::Error;

/// Failures of the verification-code lifecycle and authentication handshake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Missing or malformed input
    #[error("invalid request: {field}")]
    InvalidRequest { field: String },

    /// Challenge absent from the store: expired or never issued.
    /// The two cases are indistinguishable by design.
    #[error("challenge expired or not found")]
    ChallengeExpired,

    /// Submitted code does not match the stored challenge
    #[error("challenge code mismatch")]
    ChallengeMismatch,

    /// Keyed expiring store or user store failure
    #[error("storage failure: {message}")]
    Storage { message: String },

    /// SMS dispatcher reported failure
    #[error("sms dispatch failure: {message}")]
    Dispatch { message: String },

    /// Registration with a mobile number that already exists
    #[error("user already exists")]
    DuplicateUser,

    /// Login with an unknown mobile number
    #[error("user not found")]
    UserNotFound,

    /// Password check failed
    #[error("wrong username or password")]
    CredentialError,

    /// Unexpected internal failure (e.g. password hashing)
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AuthError {
    /// Shorthand for [`AuthError::InvalidRequest`].
    pub fn invalid(field: impl Into<String>) -> Self {
        Self::InvalidRequest { field: field.into() }
    }

    /// Shorthand for [`AuthError::Storage`].
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage { message: message.into() }
    }
}

/// Result alias used throughout the core services.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::invalid("mobile");
        assert_eq!(err.to_string(), "invalid request: mobile");

        let err = AuthError::storage("redis down");
        assert_eq!(err.to_string(), "storage failure: redis down");
    }

    #[test]
    fn test_expired_and_missing_share_one_variant() {
        // Absence in the store always maps to the same outcome.
        assert_eq!(AuthError::ChallengeExpired, AuthError::ChallengeExpired);
    }
}
