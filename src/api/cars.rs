use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;
use crate::models::car::{Car, CarUpdate, CreateCar};
use crate::models::colour::Colour;
use crate::AppState;

/// GET /api/cars
pub async fn list_cars(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Car>>, AppError> {
    let cars = state.db.list_cars().await?;
    Ok(Json(cars))
}

/// POST /api/cars
pub async fn create_car(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateCar>, JsonRejection>,
) -> Result<Json<Car>, AppError> {
    let Json(payload) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    let car = state.db.insert_car(&payload).await?;
    Ok(Json(car))
}

/// GET /api/cars/:id
pub async fn get_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Car>, AppError> {
    state
        .db
        .get_car(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound { resource: "car", id })
}

/// PUT /api/cars/:id
pub async fn update_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<CarUpdate>, JsonRejection>,
) -> Result<Json<Car>, AppError> {
    let Json(update) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    if update.is_empty() {
        return Err(AppError::NoUpdateFields);
    }
    state
        .db
        .update_car(id, &update)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound { resource: "car", id })
}

/// DELETE /api/cars/:id
pub async fn delete_car(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    if state.db.delete_car(id).await? {
        Ok(Json(json!({ "message": "deleted" })))
    } else {
        Err(AppError::NotFound { resource: "car", id })
    }
}

/// GET /api/cars/:id/colours
pub async fn list_car_colours(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Colour>>, AppError> {
    state
        .db
        .get_car(id)
        .await?
        .ok_or(AppError::NotFound { resource: "car", id })?;
    let colours = state.db.list_car_colours(id).await?;
    Ok(Json(colours))
}

#[derive(Deserialize)]
pub struct SetCarColours {
    pub colour_ids: Vec<i64>,
}

/// PUT /api/cars/:id/colours — replace the car's colour set.
pub async fn set_car_colours(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    payload: Result<Json<SetCarColours>, JsonRejection>,
) -> Result<Json<Vec<Colour>>, AppError> {
    let Json(payload) = payload.map_err(|rej| AppError::BadRequest(rej.body_text()))?;
    state
        .db
        .get_car(id)
        .await?
        .ok_or(AppError::NotFound { resource: "car", id })?;
    if !state.db.colours_exist(&payload.colour_ids).await? {
        return Err(AppError::BadRequest("unknown colour id".to_string()));
    }
    state.db.set_car_colours(id, &payload.colour_ids).await?;
    let colours = state.db.list_car_colours(id).await?;
    Ok(Json(colours))
}
