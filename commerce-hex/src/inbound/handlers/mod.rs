//! HTTP request handlers.

pub mod payments;
pub mod products;
pub mod transactions;

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use commerce_types::{AppError, ErrorResponse};

/// Shopping-service error response: `{message, error}`.
///
/// Wraps `AppError` to implement IntoResponse (orphan rule workaround) and
/// carries the handler's context message.
#[derive(Debug)]
pub struct ApiError {
    message: String,
    error: AppError,
}

impl ApiError {
    pub fn new(message: impl Into<String>, error: AppError) -> Self {
        Self {
            message: message.into(),
            error,
        }
    }

    /// Builds a `map_err` adapter that tags errors with a context message.
    pub fn context(message: &'static str) -> impl Fn(AppError) -> Self {
        move |error| Self::new(message, error)
    }

    /// Like [`ApiError::context`], with a dedicated message for `NotFound`.
    pub fn lookup(
        not_found: &'static str,
        otherwise: &'static str,
    ) -> impl Fn(AppError) -> Self {
        move |error| match error {
            AppError::NotFound(_) => Self::new(not_found, error),
            _ => Self::new(otherwise, error),
        }
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            AppError::Validation(_) | AppError::InvalidId(_) | AppError::NoFields => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PaymentServiceUnavailable(_)
            | AppError::PaymentService(_)
            | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.error, "{}", self.message);
        }

        let message = match self.error {
            AppError::Validation(_) => "Validation failed".to_string(),
            _ => self.message,
        };

        let body = ErrorResponse {
            message,
            error: self.error.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// JSON extractor whose rejection uses the shopping error envelope.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(invalid_body(rejection)),
        }
    }
}

fn invalid_body(rejection: JsonRejection) -> Response {
    let body = ErrorResponse {
        message: "Invalid request body".into(),
        error: rejection.body_text(),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}
