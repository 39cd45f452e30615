//! Database row structs shared by both backends.
//!
//! Identifiers are stored as hyphenated UUID text in both SQLite and
//! PostgreSQL so one set of row types serves both.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use commerce_types::{Payment, PaymentId, Product, ProductId, RepoError, Transaction, TransactionId};

fn parse_uuid(raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw).map_err(|e| RepoError::Database(format!("corrupt id {raw:?}: {e}")))
}

/// Product row from database.
#[derive(FromRow)]
pub struct DbProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl DbProduct {
    pub fn into_domain(self) -> Result<Product, RepoError> {
        Ok(Product::from_parts(
            ProductId::from_uuid(parse_uuid(&self.id)?),
            self.name,
            self.price,
        ))
    }
}

/// Transaction row from database.
#[derive(FromRow)]
pub struct DbTransaction {
    pub id: String,
    pub product_id: String,
    pub date: DateTime<Utc>,
    pub price: f64,
    pub payment_method: String,
    pub payment_id: String,
}

impl DbTransaction {
    pub fn into_domain(self) -> Result<Transaction, RepoError> {
        Ok(Transaction::from_parts(
            TransactionId::from_uuid(parse_uuid(&self.id)?),
            ProductId::from_uuid(parse_uuid(&self.product_id)?),
            self.date,
            self.price,
            self.payment_method,
            self.payment_id,
        ))
    }
}

/// Payment row from database.
#[derive(FromRow)]
pub struct DbPayment {
    pub id: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl DbPayment {
    pub fn into_domain(self) -> Result<Payment, RepoError> {
        Ok(Payment::from_parts(
            PaymentId::from_uuid(parse_uuid(&self.id)?),
            self.amount,
            self.created_at,
        ))
    }
}
