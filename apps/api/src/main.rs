use anyhow::Result;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use curricula::auth::jwt::JwtConfig;
use curricula::config::Config;
use curricula::db::{create_pool, init_schema};
use curricula::llm_client::OpenAiClient;
use curricula::routes::build_router;
use curricula::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Curricula API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and make sure the tables exist
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    // Initialize the completion client
    let llm = OpenAiClient::new(config.openai_api_key.clone(), config.openai_model.clone());
    info!("Completion client initialized (model: {})", llm.model());

    let jwt = JwtConfig {
        secret: config.jwt_secret.clone(),
        access_token_expiry_mins: config.access_token_expiry_mins,
    };

    // Build app state
    let state = AppState {
        db,
        llm: Arc::new(llm),
        jwt,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config.cors_origins));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the CORS layer for the configured browser origins.
/// Credentialed requests require an explicit origin list, so unparsable
/// origins are dropped with a warning instead of falling back to a wildcard.
fn build_cors(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring unparsable CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}
