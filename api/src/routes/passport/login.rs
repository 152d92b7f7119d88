//! `POST /passport/login`

use actix_session::Session;
use actix_web::{web, HttpResponse};
use validator::Validate;

use portal_core::repositories::UserRepository;
use portal_core::services::{CodeStore, SmsSender};
use portal_shared::types::response::{ret, ApiResponse};

use crate::app::AppState;
use crate::dto::LoginRequest;
use crate::handlers::{envelope, error_envelope};

use super::{attach_session, log_session_failure};

pub async fn login<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    session: Session,
    body: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsSender + 'static,
    C: CodeStore + 'static,
{
    if body.validate().is_err() {
        return HttpResponse::Ok()
            .json(ApiResponse::<()>::error(ret::PARAMERR, "invalid parameters"));
    }

    match state.auth.login(&body.mobile, &body.password).await {
        Ok(identity) => {
            if let Err(e) = attach_session(&session, &identity) {
                log_session_failure("login", &e);
                return HttpResponse::Ok()
                    .json(ApiResponse::<()>::error(ret::SERVERERR, "internal error"));
            }
            envelope("login successful")
        }
        Err(e) => error_envelope(&e),
    }
}
