//! Payment domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A recorded payment.
///
/// Payments are write-once audit records: there is no update or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    /// Paid amount, always > 0
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a new payment.
    pub fn new(amount: f64) -> Result<Self, DomainError> {
        if !(amount > 0.0) {
            return Err(DomainError::NonPositiveAmount(amount));
        }
        Ok(Self {
            id: PaymentId::new(),
            amount,
            created_at: Utc::now(),
        })
    }

    /// Reconstructs a payment from stored fields.
    pub fn from_parts(id: PaymentId, amount: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            amount,
            created_at,
        }
    }
}
