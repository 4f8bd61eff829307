use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::jwt::JwtConfig;
use crate::llm_client::Completion;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable completion backend. Production wires the OpenAI client;
    /// tests substitute canned implementations.
    pub llm: Arc<dyn Completion>,
    pub jwt: JwtConfig,
}
