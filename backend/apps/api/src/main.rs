//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.
//!
//! ## Configuration (environment)
//! - `DATABASE_URL` - PostgreSQL connection string (required)
//! - `AUTH_TOKEN_SECRET` - base64, 32 bytes (required in release builds;
//!   debug builds fall back to a random per-process secret)
//! - `AUTH_TOKEN_TTL_SECS` - token time-to-live (default 3600)
//! - `AUTH_CLOCK_SKEW_SECS` - expiry skew tolerance (default 0)
//! - `AUTH_ARGON2_M_COST_KIB`, `AUTH_ARGON2_T_COST`, `AUTH_ARGON2_P_COST` -
//!   password hashing work factor (defaults 19456 / 2 / 1)
//! - `AUTH_PASSWORD_PEPPER` - optional base64 pepper
//! - `FRONTEND_ORIGINS` - comma separated CORS origins

use auth::{AuthConfig, PgAccountRepository, auth_router, protected_router};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = Arc::new(load_auth_config()?);
    let account_repo = PgAccountRepository::new(pool.clone());

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(account_repo, auth_config.clone()))
        .nest("/api", protected_router(auth_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Build the auth configuration from the environment
///
/// Debug builds fall back to a random per-process secret; release builds
/// require `AUTH_TOKEN_SECRET` so tokens survive restarts and scale-out.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    let mut config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        let secret_b64 = env::var("AUTH_TOKEN_SECRET")
            .expect("AUTH_TOKEN_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "AUTH_TOKEN_SECRET must decode to 32 bytes"
        );

        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            token_secret: secret,
            ..AuthConfig::default()
        }
    };

    if let Ok(ttl) = env::var("AUTH_TOKEN_TTL_SECS") {
        config.token_ttl = Duration::from_secs(ttl.parse()?);
    }

    if let Ok(skew) = env::var("AUTH_CLOCK_SKEW_SECS") {
        config.clock_skew = Duration::from_secs(skew.parse()?);
    }

    if let Ok(m_cost) = env::var("AUTH_ARGON2_M_COST_KIB") {
        config.hash_params.m_cost_kib = m_cost.parse()?;
    }

    if let Ok(t_cost) = env::var("AUTH_ARGON2_T_COST") {
        config.hash_params.t_cost = t_cost.parse()?;
    }

    if let Ok(p_cost) = env::var("AUTH_ARGON2_P_COST") {
        config.hash_params.p_cost = p_cost.parse()?;
    }

    if let Ok(pepper_b64) = env::var("AUTH_PASSWORD_PEPPER") {
        let pepper = Engine::decode(&general_purpose::STANDARD, &pepper_b64)?;
        config.password_pepper = Some(pepper);
    }

    Ok(config)
}
