//! # Commerce Hex
//!
//! Application services and HTTP adapters for the shopping and payment
//! services.
//!
//! ## Architecture
//!
//! - `service/` - Application services (orchestrate domain operations)
//! - `inbound/` - HTTP adapters (Axum routers for both services)
//! - `openapi` - OpenAPI documents served under `/swagger-ui`
//!
//! Services are generic over the repository ports and the `PaymentClient`
//! port, so adapters are injected at compile time and tests substitute
//! in-memory doubles.

pub mod inbound;
pub mod openapi;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::{PaymentService, ProductService, TransactionService};
