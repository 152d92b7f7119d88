//! Strongly-typed request schemas for the passport endpoints.
//!
//! Field names mirror the frontend contract, including the historical
//! `smscode` spelling on registration.

use serde::Deserialize;
use validator::Validate;

/// Query parameters for `GET /passport/image_code`.
#[derive(Debug, Deserialize)]
pub struct ImageCodeQuery {
    #[serde(rename = "imageCodeId")]
    pub image_code_id: Option<String>,
}

/// Body of `POST /passport/sms_code`.
#[derive(Debug, Deserialize, Validate)]
pub struct SmsCodeRequest {
    #[validate(length(min = 1, message = "mobile is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "image_code is required"))]
    pub image_code: String,
    #[validate(length(min = 1, message = "image_code_id is required"))]
    pub image_code_id: String,
}

/// Body of `POST /passport/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "mobile is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "smscode is required"))]
    pub smscode: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Body of `POST /passport/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "mobile is required"))]
    pub mobile: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
