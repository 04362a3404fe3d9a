use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use crate::errors::AppError;
use crate::models::category::{Category, CategoryUpdate, CreateCategory};
use crate::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.db.list_categories().await?;
    Ok(Json(categories))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateCategory>, JsonRejection>,
) -> Result<Json<Category>, AppError> {
    let Json(payload) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    let category = state.db.insert_category(&payload).await?;
    Ok(Json(category))
}

/// GET /api/categories/:id
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, AppError> {
    state
        .db
        .get_category(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound {
            resource: "category",
            id,
        })
}

/// PUT /api/categories/:id
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<CategoryUpdate>, JsonRejection>,
) -> Result<Json<Category>, AppError> {
    let Json(update) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    if update.is_empty() {
        return Err(AppError::NoUpdateFields);
    }
    state
        .db
        .update_category(id, &update)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound {
            resource: "category",
            id,
        })
}

/// DELETE /api/categories/:id
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if state.db.delete_category(id).await? {
        Ok(Json(json!({ "message": "deleted" })))
    } else {
        Err(AppError::NotFound {
            resource: "category",
            id,
        })
    }
}
