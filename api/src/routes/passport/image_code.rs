//! `GET /passport/image_code?imageCodeId=<id>`
//!
//! Returns the rendered challenge image directly. Unlike the JSON routes
//! this endpoint speaks plain HTTP status codes: 403 when the id is missing
//! and 500 when the store is unavailable, since the caller is an `<img>`
//! tag rather than script code inspecting an envelope.

use actix_web::{web, HttpResponse};
use tracing::error;

use portal_core::errors::AuthError;
use portal_core::repositories::UserRepository;
use portal_core::services::{CodeStore, SmsSender};

use crate::app::AppState;
use crate::dto::ImageCodeQuery;

pub async fn get_image_code<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    query: web::Query<ImageCodeQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsSender + 'static,
    C: CodeStore + 'static,
{
    let image_code_id = match query.image_code_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return HttpResponse::Forbidden().finish(),
    };

    match state.verification.issue_image_challenge(image_code_id).await {
        Ok(image) => HttpResponse::Ok().content_type("image/svg+xml").body(image),
        Err(AuthError::InvalidRequest { .. }) => HttpResponse::Forbidden().finish(),
        Err(e) => {
            error!(image_code_id, error = %e, "image challenge failed");
            HttpResponse::InternalServerError().finish()
        }
    }
}
