//! Request DTOs for the passport routes.

pub mod passport;

pub use passport::{ImageCodeQuery, LoginRequest, RegisterRequest, SmsCodeRequest};
