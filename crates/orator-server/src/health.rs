use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;

/// Health check handler; independent of downstream state
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}
