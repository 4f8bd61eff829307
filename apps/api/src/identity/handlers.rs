//! HTTP handlers for registration and login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::jwt::generate_access_token;
use crate::errors::AppError;
use crate::identity::store;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Public view of an account; never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserOut {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserOut>), AppError> {
    let user = store::register(
        &state.db,
        &payload.username,
        &payload.email,
        &payload.password,
    )
    .await?;

    info!("Registered user {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(UserOut {
            id: user.id,
            username: user.username,
            email: user.email,
        }),
    ))
}

/// POST /auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let user = store::authenticate(&state.db, &payload.username, &payload.password).await?;

    let access_token = generate_access_token(user.id, &state.jwt)
        .map_err(|e| anyhow::anyhow!("token generation failed: {e}"))?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
