//! Product domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for a Product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Creates a new random ProductId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ProductId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A product offered by the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Display name, never empty
    pub name: String,
    /// Unit price, always > 0
    pub price: f64,
}

impl Product {
    /// Creates a new product with a fresh id.
    ///
    /// # Validation
    /// - Name cannot be empty
    /// - Price must be greater than zero
    pub fn new(name: String, price: f64) -> Result<Self, DomainError> {
        Self::validate(&name, price)?;
        Ok(Self {
            id: ProductId::new(),
            name,
            price,
        })
    }

    /// Checks the fields a product must always satisfy.
    pub fn validate(name: &str, price: f64) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        // `!(price > 0.0)` also rejects NaN.
        if !(price > 0.0) {
            return Err(DomainError::NonPositivePrice(price));
        }
        Ok(())
    }

    /// Reconstructs a product from stored fields.
    pub fn from_parts(id: ProductId, name: String, price: f64) -> Self {
        Self { id, name, price }
    }
}
