//! `GET /passport/logout`

use actix_session::Session;
use actix_web::HttpResponse;

use crate::handlers::envelope;

use super::clear_session;

/// Idempotent: succeeds whether or not an identity was attached.
pub async fn logout(session: Session) -> HttpResponse {
    clear_session(&session);
    envelope("logout successful")
}
