use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use crate::errors::AppError;
use crate::models::colour::{is_valid_hex, Colour, ColourUpdate, CreateColour};
use crate::AppState;

/// GET /api/colours
pub async fn list_colours(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Colour>>, AppError> {
    let colours = state.db.list_colours().await?;
    Ok(Json(colours))
}

/// POST /api/colours
pub async fn create_colour(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateColour>, JsonRejection>,
) -> Result<Json<Colour>, AppError> {
    let Json(payload) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    if !is_valid_hex(&payload.hex) {
        return Err(AppError::BadRequest(format!(
            "invalid hex colour code: {}",
            payload.hex
        )));
    }
    let colour = state.db.insert_colour(&payload).await?;
    Ok(Json(colour))
}

/// GET /api/colours/:id
pub async fn get_colour(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Colour>, AppError> {
    state
        .db
        .get_colour(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound {
            resource: "colour",
            id,
        })
}

/// PUT /api/colours/:id
pub async fn update_colour(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<ColourUpdate>, JsonRejection>,
) -> Result<Json<Colour>, AppError> {
    let Json(update) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    if update.is_empty() {
        return Err(AppError::NoUpdateFields);
    }
    if let Some(hex) = &update.hex {
        if !is_valid_hex(hex) {
            return Err(AppError::BadRequest(format!(
                "invalid hex colour code: {}",
                hex
            )));
        }
    }
    state
        .db
        .update_colour(id, &update)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound {
            resource: "colour",
            id,
        })
}

/// DELETE /api/colours/:id
pub async fn delete_colour(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if state.db.delete_colour(id).await? {
        Ok(Json(json!({ "message": "deleted" })))
    } else {
        Err(AppError::NotFound {
            resource: "colour",
            id,
        })
    }
}
