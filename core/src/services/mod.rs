//! Business services

pub mod auth;
pub mod captcha;
pub mod verification;

pub use auth::AuthService;
pub use captcha::{Captcha, CaptchaGenerator};
pub use verification::{CodeStore, SmsSender, VerificationService};
