//! HTTP Inbound Adapters
//!
//! Axum-based HTTP servers that drive the application layer: one for the
//! shopping service, one for the payment service.

pub mod handlers;
mod server;

pub use server::{PaymentServer, ShoppingServer};
