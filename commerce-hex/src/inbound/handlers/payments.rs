//! Payment endpoint.
//!
//! The payment API answers every failure with 400 and a bare `{error}` body.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRequest, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use commerce_types::{AppError, CreatePaymentRequest, PaymentRepository, PaymentResponse};

use crate::PaymentService;

/// Payment-service error response.
pub struct PaymentApiError(pub String);

impl From<AppError> for PaymentApiError {
    fn from(err: AppError) -> Self {
        if !err.is_client_error() {
            tracing::error!(error = %err, "payment not recorded");
        }
        PaymentApiError(err.to_string())
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.0 });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// JSON extractor whose rejection uses the payment error body.
pub struct PaymentJson<T>(pub T);

impl<S, T> FromRequest<S> for PaymentJson<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = PaymentApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| PaymentApiError(rejection.body_text()))
    }
}

#[tracing::instrument(skip(service))]
pub async fn create_payment<R: PaymentRepository>(
    State(service): State<Arc<PaymentService<R>>>,
    PaymentJson(req): PaymentJson<CreatePaymentRequest>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let payment = service.create_payment(req).await?;
    Ok((StatusCode::CREATED, Json(PaymentResponse::from(payment))))
}
