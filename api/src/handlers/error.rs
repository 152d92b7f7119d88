//! Mapping from the core error taxonomy to the `{errno, errmsg}` envelope.
//!
//! Every envelope response is HTTP 200; the frontend branches on `errno`,
//! not on the status line. Internal error text never reaches the client.

use actix_web::HttpResponse;

use portal_core::errors::AuthError;
use portal_shared::types::response::{ret, ApiResponse};

/// Stable errno plus a client-safe message for each error variant.
pub fn error_code(err: &AuthError) -> (&'static str, &'static str) {
    match err {
        AuthError::InvalidRequest { .. } => (ret::PARAMERR, "invalid parameters"),
        AuthError::ChallengeExpired => (ret::NODATA, "verification code expired"),
        AuthError::ChallengeMismatch => (ret::DATAERR, "verification code incorrect"),
        AuthError::Storage { .. } => (ret::DBERR, "data access failed"),
        AuthError::Dispatch { .. } => (ret::THIRDERR, "sms delivery failed"),
        AuthError::DuplicateUser => (ret::DATAEXIST, "mobile already registered"),
        AuthError::UserNotFound => (ret::USERERR, "user does not exist"),
        AuthError::CredentialError => (ret::PWDERR, "wrong mobile or password"),
        AuthError::Internal { .. } => (ret::SERVERERR, "internal error"),
    }
}

/// A success envelope with the given message.
pub fn envelope(errmsg: &str) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()>::ok(errmsg))
}

/// An error envelope for a core error.
pub fn error_envelope(err: &AuthError) -> HttpResponse {
    let (errno, errmsg) = error_code(err);
    HttpResponse::Ok().json(ApiResponse::<()>::error(errno, errmsg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_has_a_stable_code() {
        let cases = [
            (AuthError::invalid("mobile"), ret::PARAMERR),
            (AuthError::ChallengeExpired, ret::NODATA),
            (AuthError::ChallengeMismatch, ret::DATAERR),
            (AuthError::storage("boom"), ret::DBERR),
            (
                AuthError::Dispatch {
                    message: "x".to_string(),
                },
                ret::THIRDERR,
            ),
            (AuthError::DuplicateUser, ret::DATAEXIST),
            (AuthError::UserNotFound, ret::USERERR),
            (AuthError::CredentialError, ret::PWDERR),
            (
                AuthError::Internal {
                    message: "x".to_string(),
                },
                ret::SERVERERR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(error_code(&err).0, expected, "for {err:?}");
        }
    }

    #[test]
    fn test_internal_text_not_leaked() {
        let (_, msg) = error_code(&AuthError::storage("connection refused to 10.0.0.5"));
        assert!(!msg.contains("10.0.0.5"));
    }
}
