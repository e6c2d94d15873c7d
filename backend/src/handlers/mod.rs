use axum::{http::StatusCode, response::Json};
use serde_json::json;

pub mod reports;

pub use reports::report_routes;

pub async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({"status": "healthy", "service": "tally-api"})))
}
