//! HTTP surface for the news-portal passport flows.
//!
//! Routes are thin: they parse and validate the request, call into the core
//! services, and translate the outcome into the `{errno, errmsg}` envelope
//! the frontend expects.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;

pub use app::AppState;
