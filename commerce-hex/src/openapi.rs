//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use commerce_types::dto::{
    CreatePaymentRequest, CreateTransactionRequest, ErrorResponse, PaymentResponse,
    ProductRequest, ProductResponse, TransactionResponse, UpdateTransactionRequest,
};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

// Concrete shapes of the `{message, data}` envelope, for documentation.

#[derive(Serialize, ToSchema)]
struct ProductEnvelope {
    #[schema(example = "Product retrieved successfully")]
    message: String,
    data: ProductResponse,
}

#[derive(Serialize, ToSchema)]
struct ProductListEnvelope {
    #[schema(example = "Products retrieved successfully")]
    message: String,
    data: Vec<ProductResponse>,
}

#[derive(Serialize, ToSchema)]
struct TransactionEnvelope {
    #[schema(example = "Transaction retrieved successfully")]
    message: String,
    data: TransactionResponse,
}

#[derive(Serialize, ToSchema)]
struct TransactionListEnvelope {
    #[schema(example = "Transactions retrieved successfully")]
    message: String,
    data: Vec<TransactionResponse>,
}

#[derive(Serialize, ToSchema)]
struct MessageEnvelope {
    #[schema(example = "Product updated successfully")]
    message: String,
}

// Dummy functions to generate path documentation.
// The real handlers are generic over the ports and cannot carry the macro.

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

// ─────────────────────────────────────────────────────────────────────────────
// Products
// ─────────────────────────────────────────────────────────────────────────────

/// Create a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductEnvelope),
        (status = 400, description = "Invalid body or validation failure", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_product() {}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = ProductListEnvelope),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_products() {}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID (UUID)")),
    responses(
        (status = 200, description = "Product found", body = ProductEnvelope),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn get_product() {}

/// Replace a product's name and price
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID (UUID)")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = MessageEnvelope),
        (status = 400, description = "Malformed ID or validation failure", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn update_product() {}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product ID (UUID)")),
    responses(
        (status = 200, description = "Product deleted", body = MessageEnvelope),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn delete_product() {}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

/// Create a transaction (records a payment first)
#[utoipa::path(
    post,
    path = "/transactions",
    tag = "transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction created", body = TransactionEnvelope),
        (status = 400, description = "Invalid body, malformed product_id or validation failure", body = ErrorResponse),
        (status = 500, description = "Payment service or storage failure", body = ErrorResponse)
    )
)]
async fn create_transaction() {}

/// List transactions, newest first
#[utoipa::path(
    get,
    path = "/transactions",
    tag = "transactions",
    responses(
        (status = 200, description = "All transactions", body = TransactionListEnvelope),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_transactions() {}

/// Get a transaction by ID
#[utoipa::path(
    get,
    path = "/transactions/{id}",
    tag = "transactions",
    params(("id" = String, Path, description = "Transaction ID (UUID)")),
    responses(
        (status = 200, description = "Transaction found", body = TransactionEnvelope),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
async fn get_transaction() {}

/// Partially update a transaction
///
/// Empty strings and a zero price leave the stored value unchanged.
#[utoipa::path(
    put,
    path = "/transactions/{id}",
    tag = "transactions",
    params(("id" = String, Path, description = "Transaction ID (UUID)")),
    request_body = UpdateTransactionRequest,
    responses(
        (status = 200, description = "Transaction updated", body = MessageEnvelope),
        (status = 400, description = "Malformed ID, invalid field or no fields to update", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
async fn update_transaction() {}

/// Delete a transaction
#[utoipa::path(
    delete,
    path = "/transactions/{id}",
    tag = "transactions",
    params(("id" = String, Path, description = "Transaction ID (UUID)")),
    responses(
        (status = 200, description = "Transaction deleted", body = MessageEnvelope),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
async fn delete_transaction() {}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

/// Record a payment
#[utoipa::path(
    post,
    path = "/payments",
    tag = "payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = PaymentResponse),
        (status = 400, description = "Any failure", body = inline(serde_json::Value), example = json!({"error": "amount must be greater than 0, got 0"}))
    )
)]
async fn create_payment() {}

/// OpenAPI documentation for the shopping API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopping Service API",
        version = "1.0.0",
        description = "Products and transactions. Creating a transaction records a payment in the payment service first.",
    ),
    paths(
        health,
        create_product,
        list_products,
        get_product,
        update_product,
        delete_product,
        create_transaction,
        list_transactions,
        get_transaction,
        update_transaction,
        delete_transaction,
    ),
    components(
        schemas(
            ProductRequest,
            ProductResponse,
            CreateTransactionRequest,
            UpdateTransactionRequest,
            TransactionResponse,
            ErrorResponse,
            ProductEnvelope,
            ProductListEnvelope,
            TransactionEnvelope,
            TransactionListEnvelope,
            MessageEnvelope,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "products", description = "Product catalogue"),
        (name = "transactions", description = "Purchases backed by recorded payments"),
    )
)]
pub struct ShoppingApiDoc;

/// OpenAPI documentation for the payment API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Service API",
        version = "1.0.0",
        description = "Records payments on behalf of the shopping service.",
    ),
    paths(health, create_payment),
    components(schemas(CreatePaymentRequest, PaymentResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment recording"),
    )
)]
pub struct PaymentApiDoc;
