//! Error types for the shopping and payment services.

use std::time::Duration;

/// Domain-level errors (business rule violations).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("name is required")]
    EmptyName,

    #[error("price must be greater than 0, got {0}")]
    NonPositivePrice(f64),

    #[error("amount must be greater than 0, got {0}")]
    NonPositiveAmount(f64),

    #[error("payment_method is required")]
    EmptyPaymentMethod,
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

}

/// Failures of the outbound call to the payment service.
#[derive(Debug, thiserror::Error)]
pub enum PaymentClientError {
    /// Connection refused, DNS failure, timeout.
    #[error("failed to call payment service: {0}")]
    Unavailable(String),

    /// The payment service answered with a non-success status.
    #[error("payment service returned status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Success status, but the body could not be used.
    #[error("failed to read payment response: {0}")]
    InvalidResponse(String),
}

/// Application-level errors (for HTTP responses).
///
/// Every kind stays distinguishable here even where several of them share
/// one HTTP status code on the wire.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad or missing input.
    #[error("{0}")]
    Validation(String),

    /// Identifier that does not parse, e.g. `invalid product ID`.
    #[error("invalid {0}")]
    InvalidId(String),

    /// Well-formed identifier without a matching record.
    #[error("{0} not found")]
    NotFound(String),

    /// Partial update carried nothing to apply.
    #[error("no fields to update")]
    NoFields,

    #[error("payment service unavailable: {0}")]
    PaymentServiceUnavailable(String),

    #[error("payment service error: {0}")]
    PaymentService(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// True for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::InvalidId(_) | AppError::NoFields
        )
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => e.into(),
            e @ (RepoError::Database(_) | RepoError::Timeout(_)) => {
                AppError::Storage(e.to_string())
            }
        }
    }
}

impl From<PaymentClientError> for AppError {
    fn from(err: PaymentClientError) -> Self {
        match err {
            PaymentClientError::Unavailable(_) => {
                AppError::PaymentServiceUnavailable(err.to_string())
            }
            PaymentClientError::Rejected { .. } | PaymentClientError::InvalidResponse(_) => {
                AppError::PaymentService(err.to_string())
            }
        }
    }
}
