//! Transaction domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::product::ProductId;
use crate::error::DomainError;

/// Unique identifier for a Transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Creates a new random TransactionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TransactionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A purchase of a product, backed by a payment recorded in the payment service.
///
/// `product_id` is never checked against the product store; a transaction
/// may reference a product that does not exist (or no longer exists).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Purchased product
    pub product_id: ProductId,
    /// Server time at creation
    pub date: DateTime<Utc>,
    /// Charged price, always > 0
    pub price: f64,
    /// Free-form method label, e.g. "card"
    pub payment_method: String,
    /// Opaque id assigned by the payment service
    pub payment_id: String,
}

impl Transaction {
    /// Builds a transaction for a payment that has already been recorded.
    ///
    /// The date is stamped from the server clock here, never taken from the caller.
    pub fn paid(
        product_id: ProductId,
        price: f64,
        payment_method: String,
        payment_id: String,
    ) -> Result<Self, DomainError> {
        Self::validate(price, &payment_method)?;
        Ok(Self {
            id: TransactionId::new(),
            product_id,
            date: Utc::now(),
            price,
            payment_method,
            payment_id,
        })
    }

    /// Checks the caller-supplied fields of a new transaction.
    pub fn validate(price: f64, payment_method: &str) -> Result<(), DomainError> {
        if !(price > 0.0) {
            return Err(DomainError::NonPositivePrice(price));
        }
        if payment_method.trim().is_empty() {
            return Err(DomainError::EmptyPaymentMethod);
        }
        Ok(())
    }

    /// Reconstructs a transaction from stored fields.
    pub fn from_parts(
        id: TransactionId,
        product_id: ProductId,
        date: DateTime<Utc>,
        price: f64,
        payment_method: String,
        payment_id: String,
    ) -> Self {
        Self {
            id,
            product_id,
            date,
            price,
            payment_method,
            payment_id,
        }
    }

    /// Applies a partial update in place.
    ///
    /// Stores apply patches in SQL; in-memory repositories use this instead.
    pub fn apply(&mut self, patch: &TransactionPatch) {
        if let Some(product_id) = patch.product_id {
            self.product_id = product_id;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(method) = &patch.payment_method {
            self.payment_method = method.clone();
        }
    }
}

/// The set of fields a partial transaction update overwrites.
///
/// `None` means "keep the stored value". The HTTP layer cannot express an
/// explicit reset: a zero price or an empty string in the update body is
/// read as "not supplied".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub product_id: Option<ProductId>,
    pub price: Option<f64>,
    pub payment_method: Option<String>,
}

impl TransactionPatch {
    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.product_id.is_none() && self.price.is_none() && self.payment_method.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paid_transaction_creation() {
        let product = ProductId::new();
        let before = Utc::now();
        let tx = Transaction::paid(product, 25.0, "card".to_string(), "p1".to_string()).unwrap();

        assert_eq!(tx.product_id, product);
        assert_eq!(tx.payment_id, "p1");
        assert!(tx.date >= before);
    }

    #[test]
    fn test_paid_transaction_validation() {
        let product = ProductId::new();

        assert!(matches!(
            Transaction::paid(product, 0.0, "card".to_string(), "p1".to_string()),
            Err(DomainError::NonPositivePrice(_))
        ));
        assert!(matches!(
            Transaction::paid(product, 10.0, " ".to_string(), "p1".to_string()),
            Err(DomainError::EmptyPaymentMethod)
        ));
    }

    #[test]
    fn test_apply_patch_only_touches_supplied_fields() {
        let mut tx =
            Transaction::paid(ProductId::new(), 25.0, "card".to_string(), "p1".to_string())
                .unwrap();
        let original = tx.clone();

        tx.apply(&TransactionPatch {
            payment_method: Some("cash".to_string()),
            ..Default::default()
        });

        assert_eq!(tx.payment_method, "cash");
        assert_eq!(tx.price, original.price);
        assert_eq!(tx.product_id, original.product_id);
        assert_eq!(tx.payment_id, original.payment_id);
        assert_eq!(tx.date, original.date);
    }

    #[test]
    fn test_empty_patch() {
        assert!(TransactionPatch::default().is_empty());
        assert!(
            !TransactionPatch {
                price: Some(1.0),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
