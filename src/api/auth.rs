use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth::{bearer_token, service};
use crate::errors::AppError;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/auth — verify credentials, issue a fresh access token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(payload) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    let token = service::login(&state.db, &state.config, &payload.email, &payload.password).await?;
    Ok(Json(LoginResponse { token }))
}

/// POST /api/logout — archive the bearer token.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let token = bearer_token(&headers).ok_or(AppError::TokenMissing)?;
    service::logout(&state.db, token).await?;
    Ok(Json(json!({ "message": "logged out" })))
}
