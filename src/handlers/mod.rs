pub mod products;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::AppState;

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let count = state.products.read().await.len();
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "product-catalog", "products": count })),
    )
}
