//! `POST /passport/sms_code`

use actix_web::{web, HttpResponse};
use validator::Validate;

use portal_core::repositories::UserRepository;
use portal_core::services::{CodeStore, SmsSender};
use portal_shared::types::response::{ret, ApiResponse};

use crate::app::AppState;
use crate::dto::SmsCodeRequest;
use crate::handlers::{envelope, error_envelope};

pub async fn send_sms_code<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    body: web::Json<SmsCodeRequest>,
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

    match state
        .verification
        .send_sms_challenge(&body.mobile, &body.image_code, &body.image_code_id)
        .await
    {
        Ok(()) => envelope("sms code sent"),
        Err(e) => error_envelope(&e),
    }
}
