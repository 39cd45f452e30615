//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use commerce_types::{
    Payment, PaymentId, PaymentRepository, Product, ProductId, ProductRepository, RepoError,
    Transaction, TransactionId, TransactionPatch, TransactionRepository,
};

use crate::types::{DbPayment, DbProduct, DbTransaction};
use crate::{LIST_TIMEOUT, SINGLE_OP_TIMEOUT, bounded};

const SCHEMA: &str = include_str!("../migrations/sqlite/0001_create_tables.sql");

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
#[derive(Clone)]
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository and applies the schema.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let in_memory = database_url.contains(":memory:");

        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if !in_memory {
            if let Some(path) = database_url.strip_prefix("sqlite://") {
                let path = path.split('?').next().unwrap_or(path);
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to `:memory:` opens its own database, so an
        // in-memory pool must stay on one connection that is never recycled.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options.connect_with(options).await?;
        sqlx::raw_sql(SCHEMA).execute(&pool).await?;

        tracing::debug!(in_memory, "sqlite schema ready");
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Reads a payment back. Not part of any port: the payment API never exposes reads.
    pub async fn get_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        let row: Option<DbPayment> = bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query_as(r#"SELECT id, amount, created_at FROM payments WHERE id = ?"#)
                .bind(id.to_string())
                .fetch_optional(&self.pool),
        )
        .await?;

        row.map(DbPayment::into_domain).transpose()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Products
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ProductRepository for SqliteRepo {
    async fn insert_product(&self, product: &Product) -> Result<(), RepoError> {
        bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query(r#"INSERT INTO products (id, name, price) VALUES (?, ?, ?)"#)
                .bind(product.id.to_string())
                .bind(&product.name)
                .bind(product.price)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
        let row: Option<DbProduct> = bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query_as(r#"SELECT id, name, price FROM products WHERE id = ?"#)
                .bind(id.to_string())
                .fetch_optional(&self.pool),
        )
        .await?;

        row.map(DbProduct::into_domain).transpose()
    }

    async fn list_products(&self) -> Result<Vec<Product>, RepoError> {
        let rows: Vec<DbProduct> = bounded(
            LIST_TIMEOUT,
            sqlx::query_as(r#"SELECT id, name, price FROM products ORDER BY rowid"#)
                .fetch_all(&self.pool),
        )
        .await?;

        rows.into_iter().map(DbProduct::into_domain).collect()
    }

    async fn update_product(
        &self,
        id: ProductId,
        name: &str,
        price: f64,
    ) -> Result<bool, RepoError> {
        let result = bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query(r#"UPDATE products SET name = ?, price = ? WHERE id = ?"#)
                .bind(name)
                .bind(price)
                .bind(id.to_string())
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool, RepoError> {
        let result = bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query(r#"DELETE FROM products WHERE id = ?"#)
                .bind(id.to_string())
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl TransactionRepository for SqliteRepo {
    async fn insert_transaction(&self, tx: &Transaction) -> Result<(), RepoError> {
        bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query(
                r#"INSERT INTO transactions (id, product_id, date, price, payment_method, payment_id)
                   VALUES (?, ?, ?, ?, ?, ?)"#,
            )
            .bind(tx.id.to_string())
            .bind(tx.product_id.to_string())
            .bind(tx.date)
            .bind(tx.price)
            .bind(&tx.payment_method)
            .bind(&tx.payment_id)
            .execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>, RepoError> {
        let row: Option<DbTransaction> = bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query_as(
                r#"SELECT id, product_id, date, price, payment_method, payment_id
                   FROM transactions WHERE id = ?"#,
            )
            .bind(id.to_string())
            .fetch_optional(&self.pool),
        )
        .await?;

        row.map(DbTransaction::into_domain).transpose()
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, RepoError> {
        let rows: Vec<DbTransaction> = bounded(
            LIST_TIMEOUT,
            sqlx::query_as(
                r#"SELECT id, product_id, date, price, payment_method, payment_id
                   FROM transactions ORDER BY date DESC"#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        rows.into_iter().map(DbTransaction::into_domain).collect()
    }

    async fn update_transaction(
        &self,
        id: TransactionId,
        patch: &TransactionPatch,
    ) -> Result<bool, RepoError> {
        let result = bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query(
                r#"UPDATE transactions
                   SET product_id = COALESCE(?, product_id),
                       price = COALESCE(?, price),
                       payment_method = COALESCE(?, payment_method)
                   WHERE id = ?"#,
            )
            .bind(patch.product_id.map(|p| p.to_string()))
            .bind(patch.price)
            .bind(patch.payment_method.as_deref())
            .bind(id.to_string())
            .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<bool, RepoError> {
        let result = bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query(r#"DELETE FROM transactions WHERE id = ?"#)
                .bind(id.to_string())
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for SqliteRepo {
    async fn insert_payment(&self, payment: &Payment) -> Result<(), RepoError> {
        bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query(r#"INSERT INTO payments (id, amount, created_at) VALUES (?, ?, ?)"#)
                .bind(payment.id.to_string())
                .bind(payment.amount)
                .bind(payment.created_at)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }
}
