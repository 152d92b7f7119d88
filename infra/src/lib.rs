//! Infrastructure layer: concrete adapters behind the core service seams.
//!
//! - **cache**: Redis-backed keyed expiring store for challenge codes
//! - **database**: MySQL user persistence via SQLx
//! - **sms**: template-SMS provider client plus a logging mock

pub mod cache;
pub mod database;
pub mod sms;

use thiserror::Error;

/// Errors raised by infrastructure adapters before they are mapped into the
/// core error taxonomy at the service boundary.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("cache operation timed out after {0}s")]
    CacheTimeout(u64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
