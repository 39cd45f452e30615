//! Repository port traits.
//!
//! Adapters (Postgres, SQLite, in-memory test doubles) implement these traits.
//! Each store exclusively owns its own table.
//!
//! Every operation is expected to be bounded by a timeout inside the adapter
//! and to surface expiry as [`RepoError::Timeout`].

use std::sync::Arc;

use crate::domain::{Payment, Product, ProductId, Transaction, TransactionId, TransactionPatch};
use crate::error::RepoError;

/// Persistence for products.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Inserts a new product.
    async fn insert_product(&self, product: &Product) -> Result<(), RepoError>;

    /// Gets a product by ID.
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepoError>;

    /// Lists all products.
    async fn list_products(&self) -> Result<Vec<Product>, RepoError>;

    /// Replaces name and price. Returns false if no product matched.
    async fn update_product(
        &self,
        id: ProductId,
        name: &str,
        price: f64,
    ) -> Result<bool, RepoError>;

    /// Deletes a product. Returns false if no product matched.
    async fn delete_product(&self, id: ProductId) -> Result<bool, RepoError>;
}

/// Persistence for transactions.
#[async_trait::async_trait]
pub trait TransactionRepository: Send + Sync + 'static {
    /// Inserts a fully stamped transaction (date and payment id already set).
    async fn insert_transaction(&self, tx: &Transaction) -> Result<(), RepoError>;

    /// Gets a transaction by ID.
    async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, RepoError>;

    /// Lists all transactions, newest `date` first.
    async fn list_transactions(&self) -> Result<Vec<Transaction>, RepoError>;

    /// Overwrites the fields present in `patch`. Returns false if no transaction matched.
    async fn update_transaction(
        &self,
        id: TransactionId,
        patch: &TransactionPatch,
    ) -> Result<bool, RepoError>;

    /// Deletes a transaction. Returns false if no transaction matched.
    async fn delete_transaction(&self, id: TransactionId) -> Result<bool, RepoError>;
}

/// Persistence for payments. Write-once: there is no read, update or delete.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Inserts a new payment.
    async fn insert_payment(&self, payment: &Payment) -> Result<(), RepoError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared handles
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl<T: ProductRepository + ?Sized> ProductRepository for Arc<T> {
    async fn insert_product(&self, product: &Product) -> Result<(), RepoError> {
        (**self).insert_product(product).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
        (**self).get_product(id).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, RepoError> {
        (**self).list_products().await
    }

    async fn update_product(
        &self,
        id: ProductId,
        name: &str,
        price: f64,
    ) -> Result<bool, RepoError> {
        (**self).update_product(id, name, price).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool, RepoError> {
        (**self).delete_product(id).await
    }
}

#[async_trait::async_trait]
impl<T: TransactionRepository + ?Sized> TransactionRepository for Arc<T> {
    async fn insert_transaction(&self, tx: &Transaction) -> Result<(), RepoError> {
        (**self).insert_transaction(tx).await
    }

    async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, RepoError> {
        (**self).get_transaction(id).await
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, RepoError> {
        (**self).list_transactions().await
    }

    async fn update_transaction(
        &self,
        id: TransactionId,
        patch: &TransactionPatch,
    ) -> Result<bool, RepoError> {
        (**self).update_transaction(id, patch).await
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<bool, RepoError> {
        (**self).delete_transaction(id).await
    }
}

#[async_trait::async_trait]
impl<T: PaymentRepository + ?Sized> PaymentRepository for Arc<T> {
    async fn insert_payment(&self, payment: &Payment) -> Result<(), RepoError> {
        (**self).insert_payment(payment).await
    }
}
