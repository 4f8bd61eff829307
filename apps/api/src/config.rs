use anyhow::{Context, Result};

/// Default access-token lifetime: 24 hours.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60 * 24;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub jwt_secret: String,
    pub access_token_expiry_mins: i64,
    pub cors_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            openai_api_key: require_env("OPENAI_API_KEY")?,
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            jwt_secret: require_env("JWT_SECRET")?,
            access_token_expiry_mins: std::env::var("JWT_ACCESS_EXPIRY_MINS")
                .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
                .parse::<i64>()
                .context("JWT_ACCESS_EXPIRY_MINS must be a valid integer")?,
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|raw| split_origins(&raw))
                .unwrap_or_else(|_| {
                    vec![
                        "http://localhost:5173".to_string(),
                        "http://127.0.0.1:5173".to_string(),
                    ]
                }),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Splits a comma-separated origin list, trimming whitespace and dropping
/// empty entries.
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
