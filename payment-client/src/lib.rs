//! # Payment Client
//!
//! A typed Rust client for the payment service. The shopping service uses it
//! as its `PaymentClient` adapter when creating transactions.

use std::time::Duration;

use commerce_types::{CreatePaymentRequest, PaymentClient, PaymentClientError, PaymentResponse};
use reqwest::Client;

/// Bound for one payment call, connect through body read.
pub const PAYMENT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Error type for building the client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("payment service base URI is empty")]
    EmptyBaseUrl,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Payment API client.
#[derive(Debug, Clone)]
pub struct HttpPaymentClient {
    base_url: String,
    http: Client,
}

impl HttpPaymentClient {
    /// Creates a new client with the standard call timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, PAYMENT_CALL_TIMEOUT)
    }

    /// Creates a new client with a custom call timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::EmptyBaseUrl);
        }

        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, http })
    }

    /// Returns the base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn payments_url(&self) -> String {
        format!("{}/payments", self.base_url)
    }

    fn transport_error(err: reqwest::Error) -> PaymentClientError {
        if err.is_timeout() {
            PaymentClientError::Unavailable(format!("request timed out: {err}"))
        } else {
            PaymentClientError::Unavailable(err.to_string())
        }
    }
}

#[async_trait::async_trait]
impl PaymentClient for HttpPaymentClient {
    #[tracing::instrument(skip(self), fields(amount = req.amount))]
    async fn create_payment(
        &self,
        req: &CreatePaymentRequest,
    ) -> Result<PaymentResponse, PaymentClientError> {
        let resp = self
            .http
            .post(self.payments_url())
            .json(req)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = resp.status();

        // A body that stalls past the deadline is a transport failure too.
        let body = resp.text().await.map_err(|e| {
            if e.is_timeout() {
                Self::transport_error(e)
            } else {
                PaymentClientError::InvalidResponse(e.to_string())
            }
        })?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "payment service rejected the payment");
            return Err(PaymentClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let payment: PaymentResponse = serde_json::from_str(&body)
            .map_err(|e| PaymentClientError::InvalidResponse(e.to_string()))?;

        if payment.id.trim().is_empty() {
            return Err(PaymentClientError::InvalidResponse(
                "payment id is empty".into(),
            ));
        }

        tracing::debug!(payment_id = %payment.id, "payment recorded");
        Ok(payment)
    }
}
