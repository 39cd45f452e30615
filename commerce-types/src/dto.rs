//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Request fields default to their zero value when missing from the JSON
//! body, so "missing" and "zero/empty" go through the same validation path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Payment, Product, ProductId, Transaction, TransactionPatch};
use crate::error::AppError;

// ─────────────────────────────────────────────────────────────────────────────
// Envelopes
// ─────────────────────────────────────────────────────────────────────────────

/// Success envelope used by the shopping service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

/// Error envelope used by the shopping service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Validation failed")]
    pub message: String,
    #[schema(example = "price must be greater than 0, got 0")]
    pub error: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Product DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create or fully replace a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[serde(default)]
    #[schema(example = "Widget")]
    pub name: String,
    #[serde(default)]
    #[schema(example = 9.99)]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(value_type = String, example = "0b8f6a3e-7c43-4f4e-9a51-3c0d1fd0f1aa")]
    pub id: ProductId,
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 9.99)]
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transaction DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTransactionRequest {
    /// Product being purchased (not checked for existence)
    #[serde(default)]
    #[schema(example = "0b8f6a3e-7c43-4f4e-9a51-3c0d1fd0f1aa")]
    pub product_id: String,
    #[serde(default)]
    #[schema(example = 19.5)]
    pub price: f64,
    #[serde(default)]
    #[schema(example = "card")]
    pub payment_method: String,
    /// Accepted for compatibility and ignored; the payment service assigns it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

/// Partial update of a transaction.
///
/// Empty strings and a zero price mean "leave unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTransactionRequest {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub payment_method: String,
    /// Ignored; payment references are immutable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

impl UpdateTransactionRequest {
    /// Turns the wire document into a patch, dropping zero/empty fields.
    pub fn into_patch(self) -> Result<TransactionPatch, AppError> {
        let product_id = if self.product_id.is_empty() {
            None
        } else {
            Some(
                self.product_id
                    .parse::<ProductId>()
                    .map_err(|_| AppError::InvalidId("product_id".into()))?,
            )
        };

        let price = if self.price == 0.0 {
            None
        } else if self.price > 0.0 {
            Some(self.price)
        } else {
            return Err(AppError::Validation(format!(
                "price must be greater than 0, got {}",
                self.price
            )));
        };

        let payment_method = if self.payment_method.is_empty() {
            None
        } else {
            Some(self.payment_method)
        };

        Ok(TransactionPatch {
            product_id,
            price,
            payment_method,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    #[schema(value_type = String)]
    pub id: crate::TransactionId,
    #[schema(value_type = String)]
    pub product_id: ProductId,
    #[schema(value_type = String, example = "2024-01-01T00:00:00Z")]
    pub date: DateTime<Utc>,
    #[schema(example = 19.5)]
    pub price: f64,
    #[schema(example = "card")]
    pub payment_method: String,
    pub payment_id: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            product_id: t.product_id,
            date: t.date,
            price: t.price,
            payment_method: t.payment_method,
            payment_id: t.payment_id,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to record a payment. Sent by the shopping service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    #[serde(default)]
    #[schema(example = 19.5)]
    pub amount: f64,
}

/// A recorded payment as returned by the payment service.
///
/// `id` is kept as a plain string: consumers treat it as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    #[schema(example = "6d2f1c8e-2b7a-4d55-8d0e-6a3f8f0c9b11")]
    pub id: String,
    #[schema(example = 19.5)]
    pub amount: f64,
}

impl From<Payment> for PaymentResponse {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id.to_string(),
            amount: p.amount,
        }
    }
}
