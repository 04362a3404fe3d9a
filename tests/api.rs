//! Crate-level tests that need no live database: request/response DTO
//! shapes, validation rules, the error envelope, and token plumbing.
//!
//! Flows that touch PostgreSQL (CRUD round-trips, login/logout against the
//! token tables) require DATABASE_URL and are exercised against a running
//! server.

mod error_envelope_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use carhub::errors::AppError;
    use http_body_util::BodyExt;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_envelope() {
        let (status, body) = body_json(AppError::NotFound {
            resource: "car",
            id: 42,
        })
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "not_found");
        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert_eq!(body["error"]["message"], "car 42 not found");
    }

    #[tokio::test]
    async fn invalid_credentials_envelope() {
        let (status, body) = body_json(AppError::InvalidCredentials).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "invalid_credentials");
        assert_eq!(body["error"]["type"], "authentication_error");
    }

    #[tokio::test]
    async fn empty_update_envelope() {
        let (status, body) = body_json(AppError::NoUpdateFields).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "no_update_fields");
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let (status, body) =
            body_json(AppError::Internal(anyhow::anyhow!("connection refused"))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        // The database error text must not leak to the client.
        assert_eq!(body["error"]["message"], "internal server error");
    }
}

mod dto_tests {
    use carhub::models::car::{CarUpdate, CreateCar};
    use carhub::models::colour::{is_valid_hex, ColourUpdate, CreateColour};

    #[test]
    fn create_car_requires_all_fields() {
        // Full payload deserializes...
        let full: Result<CreateCar, _> = serde_json::from_str(
            r#"{"name":"911","model":"992","description":"Flat six","image":"https://img/911.png","brand_id":1,"category_id":2}"#,
        );
        assert!(full.is_ok());

        // ...a partial one does not: the handler maps the rejection to 400.
        let partial: Result<CreateCar, _> = serde_json::from_str(r#"{"name":"911"}"#);
        assert!(partial.is_err());
    }

    #[test]
    fn car_update_with_unrecognized_fields_only_is_empty() {
        let update: CarUpdate =
            serde_json::from_str(r#"{"top_speed": 296, "doors": 2}"#).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn car_update_keeps_recognized_fields() {
        let update: CarUpdate =
            serde_json::from_str(r#"{"model":"992.2","brand_id":3}"#).unwrap();
        assert!(!update.is_empty());
        assert_eq!(update.model.as_deref(), Some("992.2"));
        assert_eq!(update.brand_id, Some(3));
        assert!(update.name.is_none());
    }

    #[test]
    fn colour_payloads_carry_hex() {
        let create: CreateColour =
            serde_json::from_str(r##"{"name":"Guards Red","hex":"#d5001c"}"##).unwrap();
        assert!(is_valid_hex(&create.hex));

        let update: ColourUpdate = serde_json::from_str(r#"{"hex":"zz001c"}"#).unwrap();
        assert!(!is_valid_hex(update.hex.as_deref().unwrap()));
    }

    #[test]
    fn login_response_shape() {
        let json = serde_json::to_value(carhub::api::auth::LoginResponse {
            token: "abc.def.ghi".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "token": "abc.def.ghi" }));
    }
}

mod token_tests {
    use carhub::auth::jwt;
    use chrono::Duration;

    #[test]
    fn issued_token_matches_its_claims() {
        let issued = jwt::issue("secret", "admin@example.com", Duration::hours(24)).unwrap();
        let claims = jwt::verify("secret", &issued.token).unwrap();

        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.jti, issued.jti.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn two_logins_issue_distinct_tokens() {
        // The archive-then-insert flow relies on the tokens differing; the
        // jti claim guarantees that even within the same second.
        let first = jwt::issue("secret", "admin@example.com", Duration::hours(24)).unwrap();
        let second = jwt::issue("secret", "admin@example.com", Duration::hours(24)).unwrap();
        assert_ne!(first.token, second.token);
    }
}
