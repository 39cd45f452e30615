//! Domain models for the shopping and payment services.

pub mod payment;
pub mod product;
pub mod transaction;

pub use payment::{Payment, PaymentId};
pub use product::{Product, ProductId};
pub use transaction::{Transaction, TransactionId, TransactionPatch};
