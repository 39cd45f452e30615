//! Transaction operations, including the cross-service creation flow.

use commerce_types::{
    AppError, CreatePaymentRequest, CreateTransactionRequest, PaymentClient, ProductId,
    Transaction, TransactionId, TransactionRepository, UpdateTransactionRequest,
};

use super::parse_id;

/// Application service for transactions.
///
/// Creating a transaction is a two-step saga: the payment service records a
/// payment first, then the transaction is stored locally. There is no
/// compensation step. A payment whose transaction fails to store is
/// orphaned and reported in the error log.
pub struct TransactionService<R: TransactionRepository, C: PaymentClient> {
    repo: R,
    payments: C,
}

impl<R: TransactionRepository, C: PaymentClient> TransactionService<R, C> {
    pub fn new(repo: R, payments: C) -> Self {
        Self { repo, payments }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the payment client.
    pub fn payment_client(&self) -> &C {
        &self.payments
    }

    /// Validates the request, pays through the payment service, then stores
    /// the transaction stamped with the returned payment id.
    ///
    /// Product existence is not checked. A `payment_id` in the request is
    /// ignored.
    #[tracing::instrument(skip(self, req), fields(product_id = %req.product_id, price = req.price))]
    pub async fn create_transaction(
        &self,
        req: CreateTransactionRequest,
    ) -> Result<Transaction, AppError> {
        let product_id: ProductId = parse_id(&req.product_id, "product_id")?;
        Transaction::validate(req.price, &req.payment_method)?;

        let payment = self
            .payments
            .create_payment(&CreatePaymentRequest { amount: req.price })
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "payment call failed"))?;

        let tx = Transaction::paid(product_id, req.price, req.payment_method, payment.id)?;

        if let Err(e) = self.repo.insert_transaction(&tx).await {
            tracing::error!(
                payment_id = %tx.payment_id,
                transaction_id = %tx.id,
                error = %e,
                "transaction not stored after payment was recorded; payment is orphaned"
            );
            return Err(e.into());
        }

        tracing::info!(transaction_id = %tx.id, payment_id = %tx.payment_id, "transaction created");
        Ok(tx)
    }

    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, AppError> {
        let id: TransactionId = parse_id(id, "transaction ID")?;

        self.repo
            .get_transaction(id)
            .await?
            .ok_or_else(|| AppError::NotFound("transaction".into()))
    }

    /// Lists transactions, newest first.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        self.repo.list_transactions().await.map_err(Into::into)
    }

    /// Applies the non-empty, non-zero fields of the request.
    #[tracing::instrument(skip(self))]
    pub async fn update_transaction(
        &self,
        id: &str,
        req: UpdateTransactionRequest,
    ) -> Result<(), AppError> {
        let id: TransactionId = parse_id(id, "transaction ID")?;

        let patch = req.into_patch()?;
        if patch.is_empty() {
            return Err(AppError::NoFields);
        }

        if !self.repo.update_transaction(id, &patch).await? {
            return Err(AppError::NotFound("transaction".into()));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_transaction(&self, id: &str) -> Result<(), AppError> {
        let id: TransactionId = parse_id(id, "transaction ID")?;

        if !self.repo.delete_transaction(id).await? {
            return Err(AppError::NotFound("transaction".into()));
        }
        Ok(())
    }
}
