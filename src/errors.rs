use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("no fields to update")]
    NoUpdateFields,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("missing bearer token")]
    TokenMissing,

    #[error("token not found")]
    TokenNotFound,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, code, msg) = match &self {
            AppError::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                "invalid_request_error",
                "not_found",
                format!("{} {} not found", resource, id),
            ),
            AppError::BadRequest(reason) => (
                StatusCode::BAD_REQUEST,
                "invalid_request_error",
                "bad_request",
                reason.clone(),
            ),
            AppError::NoUpdateFields => (
                StatusCode::BAD_REQUEST,
                "invalid_request_error",
                "no_update_fields",
                "provide at least one field to update".to_string(),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "authentication_error",
                "invalid_credentials",
                "invalid email or password".to_string(),
            ),
            AppError::TokenMissing => (
                StatusCode::UNAUTHORIZED,
                "authentication_error",
                "token_missing",
                "missing or malformed Authorization header".to_string(),
            ),
            AppError::TokenNotFound => (
                StatusCode::UNAUTHORIZED,
                "authentication_error",
                "token_not_found",
                "invalid or revoked token".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal_server_error",
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "message": msg,
                "type": error_type,
                "code": code,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let resp = AppError::NotFound {
            resource: "car",
            id: 7,
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn auth_errors_map_to_401() {
        for err in [
            AppError::InvalidCredentials,
            AppError::TokenMissing,
            AppError::TokenNotFound,
        ] {
            assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn empty_update_maps_to_400() {
        let resp = AppError::NoUpdateFields.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
