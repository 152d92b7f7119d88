//! Passport routes: image challenge, SMS challenge, register, login, logout.

pub mod image_code;
pub mod login;
pub mod logout;
pub mod register;
pub mod sms_code;

use actix_session::Session;
use tracing::warn;

use portal_core::domain::entities;

/// Session field holding the user id.
pub(crate) const SESSION_USER_ID: &str = "user_id";
/// Session field holding the mobile number.
pub(crate) const SESSION_MOBILE: &str = "mobile";
/// Session field holding the display name.
pub(crate) const SESSION_NICK_NAME: &str = "nick_name";

/// Attach an authenticated identity to the cookie session.
pub(crate) fn attach_session(
    session: &Session,
    identity: &entities::Session,
) -> Result<(), actix_session::SessionInsertError> {
    session.insert(SESSION_USER_ID, identity.user_id)?;
    session.insert(SESSION_MOBILE, &identity.mobile)?;
    session.insert(SESSION_NICK_NAME, &identity.nick_name)?;
    Ok(())
}

/// Drop the identity fields; a no-op on an anonymous session.
pub(crate) fn clear_session(session: &Session) {
    session.remove(SESSION_USER_ID);
    session.remove(SESSION_MOBILE);
    session.remove(SESSION_NICK_NAME);
}

pub(crate) fn log_session_failure(route: &str, e: &actix_session::SessionInsertError) {
    warn!(route, error = %e, "failed to write session cookie");
}
