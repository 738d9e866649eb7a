//! Unit-style tests for the error-to-response mapping. No database.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use lws_api::error::AppError;
use lws_core::error::CoreError;

async fn response_parts(error: AppError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_maps_to_404_with_entity_message() {
    let (status, body) = response_parts(AppError::Core(CoreError::NotFound {
        entity: "Slider",
        id: 7,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Slider with id 7 not found");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, body) =
        response_parts(AppError::Core(CoreError::Validation("Title required".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "Title required");
}

#[tokio::test]
async fn unauthorized_and_forbidden_map_to_401_and_403() {
    let (status, body) =
        response_parts(AppError::Core(CoreError::Unauthorized("No token".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, body) =
        response_parts(AppError::Core(CoreError::Forbidden("Editor required".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn internal_errors_hide_details() {
    let (status, body) =
        response_parts(AppError::InternalError("secret connection string".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"], "An internal error occurred");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, body) = response_parts(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn core_errors_convert_via_from() {
    let error: AppError = CoreError::Validation("bad".into()).into();
    assert_matches!(error, AppError::Core(CoreError::Validation(_)));
}
