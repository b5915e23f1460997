//! Inventory service routes

use std::path::Path as FsPath;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    models::{InventoryStats, NewProduct, Product, ProductPayload},
};

type ProductId = WithRejection<Path<i32>, ApiError>;
type ProductBody = WithRejection<Json<ProductPayload>, ApiError>;

/// Create the router for the inventory service
///
/// API routes live under `/api`; every other path is looked up in `static_dir`.
pub fn create_router(state: AppState, static_dir: impl AsRef<FsPath>) -> Router {
    let api_routes = Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/stats", get(get_stats));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "inventory-service"
    }))
}

/// Get all products
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.product_repository.list_all().await?;

    Ok(Json(products))
}

/// Get a product by ID
pub async fn get_product(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ProductId,
) -> ApiResult<Json<Product>> {
    let product = state
        .product_repository
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(product))
}

/// Create a new product
pub async fn create_product(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): ProductBody,
) -> ApiResult<impl IntoResponse> {
    let product = NewProduct::try_from(payload)?;
    let id = state.product_repository.create(&product).await?;
    info!("Created product {}", id);

    Ok(Json(json!({
        "id": id,
        "message": "Product created successfully"
    })))
}

/// Replace a product's fields
pub async fn update_product(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ProductId,
    WithRejection(Json(payload), _): ProductBody,
) -> ApiResult<impl IntoResponse> {
    let product = NewProduct::try_from(payload)?;

    if !state.product_repository.update(id, &product).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({"message": "Product updated successfully"})))
}

/// Delete a product by ID
pub async fn delete_product(
    State(state): State<AppState>,
    WithRejection(Path(id), _): ProductId,
) -> ApiResult<impl IntoResponse> {
    if !state.product_repository.delete(id).await? {
        return Err(ApiError::NotFound);
    }

    Ok(Json(json!({"message": "Product deleted successfully"})))
}

/// Inventory-wide aggregates
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<InventoryStats>> {
    let stats = state.product_repository.stats().await?;

    Ok(Json(stats))
}
