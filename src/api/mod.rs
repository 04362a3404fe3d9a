use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub mod auth;
pub mod brands;
pub mod cars;
pub mod categories;
pub mod colours;

/// Build the API router.
/// All routes are relative — the caller mounts this under `/api`.
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/cars", get(cars::list_cars).post(cars::create_car))
        .route(
            "/cars/:id",
            get(cars::get_car)
                .put(cars::update_car)
                .delete(cars::delete_car),
        )
        .route(
            "/cars/:id/colours",
            get(cars::list_car_colours).put(cars::set_car_colours),
        )
        .route("/brands", get(brands::list_brands).post(brands::create_brand))
        .route(
            "/brands/:id",
            get(brands::get_brand)
                .put(brands::update_brand)
                .delete(brands::delete_brand),
        )
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/colours",
            get(colours::list_colours).post(colours::create_colour),
        )
        .route(
            "/colours/:id",
            get(colours::get_colour)
                .put(colours::update_colour)
                .delete(colours::delete_colour),
        )
        .layer(TraceLayer::new_for_http())
        .fallback(fallback_404)
}

async fn fallback_404() -> StatusCode {
    StatusCode::NOT_FOUND
}
