//! Outbound port towards the payment service.
//!
//! The shopping service records a payment through this trait before it
//! persists a transaction. Implementations can be HTTP clients, test doubles, etc.

use std::sync::Arc;

use crate::dto::{CreatePaymentRequest, PaymentResponse};
use crate::error::PaymentClientError;

/// Port trait for recording payments in the payment service.
#[async_trait::async_trait]
pub trait PaymentClient: Send + Sync + 'static {
    /// Records a payment and returns the created record.
    ///
    /// Implementations must bound the call with a timeout and must not retry.
    async fn create_payment(
        &self,
        req: &CreatePaymentRequest,
    ) -> Result<PaymentResponse, PaymentClientError>;
}

#[async_trait::async_trait]
impl<T: PaymentClient + ?Sized> PaymentClient for Arc<T> {
    async fn create_payment(
        &self,
        req: &CreatePaymentRequest,
    ) -> Result<PaymentResponse, PaymentClientError> {
        (**self).create_payment(req).await
    }
}
