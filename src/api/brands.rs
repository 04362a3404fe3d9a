use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use crate::errors::AppError;
use crate::models::brand::{Brand, BrandUpdate, CreateBrand};
use crate::AppState;

/// GET /api/brands
pub async fn list_brands(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Brand>>, AppError> {
    let brands = state.db.list_brands().await?;
    Ok(Json(brands))
}

/// POST /api/brands
pub async fn create_brand(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBrand>, JsonRejection>,
) -> Result<Json<Brand>, AppError> {
    let Json(payload) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    let brand = state.db.insert_brand(&payload).await?;
    Ok(Json(brand))
}

/// GET /api/brands/:id
pub async fn get_brand(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Brand>, AppError> {
    state.db.get_brand(id).await?.map(Json).ok_or(AppError::NotFound {
        resource: "brand",
        id,
    })
}

/// PUT /api/brands/:id
pub async fn update_brand(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<BrandUpdate>, JsonRejection>,
) -> Result<Json<Brand>, AppError> {
    let Json(update) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    if update.is_empty() {
        return Err(AppError::NoUpdateFields);
    }
    state
        .db
        .update_brand(id, &update)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound {
            resource: "brand",
            id,
        })
}

/// DELETE /api/brands/:id
pub async fn delete_brand(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if state.db.delete_brand(id).await? {
        Ok(Json(json!({ "message": "deleted" })))
    } else {
        Err(AppError::NotFound {
            resource: "brand",
            id,
        })
    }
}
