//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use commerce_types::{
    Payment, PaymentId, PaymentRepository, Product, ProductId, ProductRepository, RepoError,
    Transaction, TransactionId, TransactionPatch, TransactionRepository,
};

use crate::types::{DbPayment, DbProduct, DbTransaction};
use crate::{CONNECT_TIMEOUT, LIST_TIMEOUT, SINGLE_OP_TIMEOUT, bounded};

const SCHEMA: &str = include_str!("../migrations/postgres/0001_create_tables.sql");

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
#[derive(Clone)]
pub struct PostgresRepo {
    pool: PgPool,
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository and applies the schema.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(CONNECT_TIMEOUT)
            .connect(database_url)
            .await?;

        sqlx::raw_sql(SCHEMA).execute(&pool).await?;

        tracing::debug!("postgres schema ready");
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Reads a payment back. Not part of any port: the payment API never exposes reads.
    pub async fn get_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        let row: Option<DbPayment> = bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query_as(r#"SELECT id, amount, created_at FROM payments WHERE id = $1"#)
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
impl ProductRepository for PostgresRepo {
    async fn insert_product(&self, product: &Product) -> Result<(), RepoError> {
        bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query(r#"INSERT INTO products (id, name, price) VALUES ($1, $2, $3)"#)
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
            sqlx::query_as(r#"SELECT id, name, price FROM products WHERE id = $1"#)
                .bind(id.to_string())
                .fetch_optional(&self.pool),
        )
        .await?;

        row.map(DbProduct::into_domain).transpose()
    }

    async fn list_products(&self) -> Result<Vec<Product>, RepoError> {
        let rows: Vec<DbProduct> = bounded(
            LIST_TIMEOUT,
            sqlx::query_as(r#"SELECT id, name, price FROM products ORDER BY created_at, id"#)
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
            sqlx::query(r#"UPDATE products SET name = $1, price = $2 WHERE id = $3"#)
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
            sqlx::query(r#"DELETE FROM products WHERE id = $1"#)
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
impl TransactionRepository for PostgresRepo {
    async fn insert_transaction(&self, tx: &Transaction) -> Result<(), RepoError> {
        bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query(
                r#"INSERT INTO transactions (id, product_id, date, price, payment_method, payment_id)
                   VALUES ($1, $2, $3, $4, $5, $6)"#,
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
                   FROM transactions WHERE id = $1"#,
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
                   SET product_id = COALESCE($1, product_id),
                       price = COALESCE($2, price),
                       payment_method = COALESCE($3, payment_method)
                   WHERE id = $4"#,
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
            sqlx::query(r#"DELETE FROM transactions WHERE id = $1"#)
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
impl PaymentRepository for PostgresRepo {
    async fn insert_payment(&self, payment: &Payment) -> Result<(), RepoError> {
        bounded(
            SINGLE_OP_TIMEOUT,
            sqlx::query(r#"INSERT INTO payments (id, amount, created_at) VALUES ($1, $2, $3)"#)
                .bind(payment.id.to_string())
                .bind(payment.amount)
                .bind(payment.created_at)
                .execute(&self.pool),
        )
        .await?;
        Ok(())
    }
}
