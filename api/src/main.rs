//! Server bootstrap: configuration, connections, dependency wiring.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use portal_api::{app, AppState};
use portal_core::services::{AuthService, VerificationService};
use portal_infra::cache::{RedisClient, RedisCodeStore};
use portal_infra::database::mysql::MySqlUserRepository;
use portal_infra::sms::SmsDispatcher;
use portal_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    info!(bind = %config.server.bind_address(), "starting news-portal api");

    let pool = portal_infra::database::create_pool(&config.database)
        .await
        .context("mysql pool")?;
    let redis = RedisClient::new(&config.cache).await.context("redis")?;

    let code_store = Arc::new(RedisCodeStore::new(redis));
    let sms = Arc::new(SmsDispatcher::from_config(&config.sms).context("sms dispatcher")?);
    let users = Arc::new(MySqlUserRepository::new(pool));

    let verification = Arc::new(VerificationService::new(
        Arc::clone(&sms),
        Arc::clone(&code_store),
        config.verification.clone(),
    ));
    let auth = Arc::new(AuthService::new(users, Arc::clone(&verification)));

    let state = web::Data::new(AppState::new(auth, verification));
    let session_key = app::session_key(&config.session).context("session key")?;
    let bind_address = config.server.bind_address();

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(app::session_middleware(session_key.clone()))
            .app_data(state.clone())
            .configure(app::configure::<MySqlUserRepository, SmsDispatcher, RedisCodeStore>)
    })
    .bind(&bind_address)
    .with_context(|| format!("bind {bind_address}"))?
    .run()
    .await?;

    Ok(())
}
