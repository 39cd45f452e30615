//! # Commerce Types
//!
//! Domain types and port traits shared by the shopping and payment services.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Product, Transaction, Payment)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Payment, PaymentId, Product, ProductId, Transaction, TransactionId, TransactionPatch,
};
pub use dto::*;
pub use error::{AppError, DomainError, PaymentClientError, RepoError};
pub use ports::{PaymentClient, PaymentRepository, ProductRepository, TransactionRepository};
