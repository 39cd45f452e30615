//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod payment_client;
mod repository;

pub use payment_client::PaymentClient;
pub use repository::{PaymentRepository, ProductRepository, TransactionRepository};
