//! Product endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use commerce_types::{ApiResponse, ProductRepository, ProductRequest, ProductResponse};

use super::{ApiError, JsonBody};
use crate::ProductService;

#[tracing::instrument(skip(service))]
pub async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(req): JsonBody<ProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let product = service
        .create_product(req)
        .await
        .map_err(ApiError::context("Failed to create product"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data(
            "Product created successfully",
            ProductResponse::from(product),
        )),
    ))
}

#[tracing::instrument(skip(service))]
pub async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let products = service
        .list_products()
        .await
        .map_err(ApiError::context("Failed to retrieve products"))?;

    let data: Vec<ProductResponse> = products.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::with_data(
        "Products retrieved successfully",
        data,
    )))
}

#[tracing::instrument(skip(service))]
pub async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let product = service
        .get_product(&id)
        .await
        .map_err(ApiError::lookup("Product not found", "Failed to retrieve product"))?;

    Ok(Json(ApiResponse::with_data(
        "Product retrieved successfully",
        ProductResponse::from(product),
    )))
}

#[tracing::instrument(skip(service))]
pub async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<ProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    service
        .update_product(&id, req)
        .await
        .map_err(ApiError::context("Failed to update product"))?;

    Ok(Json(ApiResponse::message("Product updated successfully")))
}

#[tracing::instrument(skip(service))]
pub async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    service
        .delete_product(&id)
        .await
        .map_err(ApiError::context("Failed to delete product"))?;

    Ok(Json(ApiResponse::message("Product deleted successfully")))
}
