//! Transaction endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use commerce_types::{
    ApiResponse, CreateTransactionRequest, PaymentClient, TransactionRepository,
    TransactionResponse, UpdateTransactionRequest,
};

use super::{ApiError, JsonBody};
use crate::TransactionService;

type Service<R, C> = Arc<TransactionService<R, C>>;

#[tracing::instrument(skip(service))]
pub async fn create_transaction<R: TransactionRepository, C: PaymentClient>(
    State(service): State<Service<R, C>>,
    JsonBody(req): JsonBody<CreateTransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tx = service
        .create_transaction(req)
        .await
        .map_err(ApiError::context("Failed to create transaction"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data(
            "Transaction created successfully",
            TransactionResponse::from(tx),
        )),
    ))
}

#[tracing::instrument(skip(service))]
pub async fn list_transactions<R: TransactionRepository, C: PaymentClient>(
    State(service): State<Service<R, C>>,
) -> Result<impl IntoResponse, ApiError> {
    let txs = service
        .list_transactions()
        .await
        .map_err(ApiError::context("Failed to retrieve transactions"))?;

    let data: Vec<TransactionResponse> = txs.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::with_data(
        "Transactions retrieved successfully",
        data,
    )))
}

#[tracing::instrument(skip(service))]
pub async fn get_transaction<R: TransactionRepository, C: PaymentClient>(
    State(service): State<Service<R, C>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let tx = service.get_transaction(&id).await.map_err(ApiError::lookup(
        "Transaction not found",
        "Failed to retrieve transaction",
    ))?;

    Ok(Json(ApiResponse::with_data(
        "Transaction retrieved successfully",
        TransactionResponse::from(tx),
    )))
}

#[tracing::instrument(skip(service))]
pub async fn update_transaction<R: TransactionRepository, C: PaymentClient>(
    State(service): State<Service<R, C>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateTransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    service
        .update_transaction(&id, req)
        .await
        .map_err(ApiError::context("Failed to update transaction"))?;

    Ok(Json(ApiResponse::message("Transaction updated successfully")))
}

#[tracing::instrument(skip(service))]
pub async fn delete_transaction<R: TransactionRepository, C: PaymentClient>(
    State(service): State<Service<R, C>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    service
        .delete_transaction(&id)
        .await
        .map_err(ApiError::context("Failed to delete transaction"))?;

    Ok(Json(ApiResponse::message("Transaction deleted successfully")))
}
