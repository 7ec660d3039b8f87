use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};

use crate::{
    error::{AppError, AppResult},
    models::{Product, ProductInput},
    AppState,
};

/// Decodes an optional JSON body. An empty body or a literal `null` is
/// `None`; anything else must be a valid product payload.
fn parse_body(body: &Bytes) -> AppResult<Option<ProductInput>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.products.read().await.list();

    info!(count = products.len(), "Retrieving all products");

    Json(products)
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let result = state.products.read().await.get(id).cloned();

    match result {
        Ok(product) => {
            info!(id, "Fetched product");
            Ok(Json(product))
        }
        Err(err) => {
            warn!(id, error = %err, "Rejected product lookup");
            Err(err.into())
        }
    }
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let candidate = parse_body(&body)?;
    let result = state.products.write().await.create(candidate);

    let product = match result {
        Ok(product) => product,
        Err(err) => {
            warn!(error = %err, "Rejected product creation");
            return Err(err.into());
        }
    };

    info!(id = product.id, name = %product.name, "Created product with ID {}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/products/{}", product.id))],
        Json(product),
    ))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> AppResult<StatusCode> {
    let mut products = state.products.write().await;

    // A missing record wins over a bad body.
    if let Err(err) = products.get(id) {
        warn!(id, error = %err, "Rejected product update");
        return Err(err.into());
    }

    let fields = parse_body(&body)?;

    if let Err(err) = products.update(id, fields) {
        warn!(id, error = %err, "Rejected product update");
        return Err(err.into());
    }
    drop(products);

    info!(id, "Updated product with ID {}", id);

    Ok(StatusCode::NO_CONTENT)
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    if let Err(err) = state.products.write().await.delete(id) {
        warn!(id, error = %err, "Rejected product delete");
        return Err(err.into());
    }

    info!(id, "Deleted product with ID {}", id);

    Ok(StatusCode::NO_CONTENT)
}
