//! Payment recording.

use commerce_types::{AppError, CreatePaymentRequest, Payment, PaymentRepository};

/// Application service behind the payment API.
pub struct PaymentService<R: PaymentRepository> {
    repo: R,
}

impl<R: PaymentRepository> PaymentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Records a payment. A missing amount arrives as zero and is rejected.
    #[tracing::instrument(skip(self), fields(amount = req.amount))]
    pub async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, AppError> {
        let payment = Payment::new(req.amount)?;
        self.repo.insert_payment(&payment).await?;

        tracing::info!(payment_id = %payment.id, "payment recorded");
        Ok(payment)
    }
}
