//! Application state and route wiring.

use std::sync::Arc;

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::web;

use portal_core::repositories::UserRepository;
use portal_core::services::{AuthService, CodeStore, SmsSender, VerificationService};
use portal_shared::config::SessionConfig;

use crate::routes;

/// Shared services, injected once at startup and cloned per worker.
pub struct AppState<U, S, C>
where
    U: UserRepository,
    S: SmsSender,
    C: CodeStore,
{
    pub auth: Arc<AuthService<U, S, C>>,
    pub verification: Arc<VerificationService<S, C>>,
}

impl<U, S, C> AppState<U, S, C>
where
    U: UserRepository,
    S: SmsSender,
    C: CodeStore,
{
    pub fn new(
        auth: Arc<AuthService<U, S, C>>,
        verification: Arc<VerificationService<S, C>>,
    ) -> Self {
        Self { auth, verification }
    }
}

/// Derive the cookie signing key, rejecting secrets too short to be safe.
pub fn session_key(config: &SessionConfig) -> anyhow::Result<Key> {
    anyhow::ensure!(
        config.secret_key.len() >= 32,
        "SESSION_SECRET_KEY must be at least 32 bytes, got {}",
        config.secret_key.len()
    );
    Ok(Key::derive_from(config.secret_key.as_bytes()))
}

/// Cookie session middleware, the counterpart of the frontend's signed
/// session cookie.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_string())
        .build()
}

/// Register all routes against the service configuration.
pub fn configure<U, S, C>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    S: SmsSender + 'static,
    C: CodeStore + 'static,
{
    cfg.route("/health", web::get().to(routes::health::health_check))
        .service(
            web::scope("/passport")
                .route(
                    "/image_code",
                    web::get().to(routes::passport::image_code::get_image_code::<U, S, C>),
                )
                .route(
                    "/sms_code",
                    web::post().to(routes::passport::sms_code::send_sms_code::<U, S, C>),
                )
                .route(
                    "/register",
                    web::post().to(routes::passport::register::register::<U, S, C>),
                )
                .route(
                    "/login",
                    web::post().to(routes::passport::login::login::<U, S, C>),
                )
                .route(
                    "/logout",
                    web::get().to(routes::passport::logout::logout),
                ),
        );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_rejects_short_secret() {
        let config = SessionConfig {
            secret_key: "too-short".to_string(),
        };
        assert!(session_key(&config).is_err());
    }

    #[test]
    fn test_session_key_accepts_default_secret() {
        assert!(session_key(&SessionConfig::default()).is_ok());
    }
}
