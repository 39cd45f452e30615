//! # Commerce Application
//!
//! Shared wiring for the `shopping-server` and `payment-server` binaries:
//! configuration loading and tracing setup.

pub mod config;
pub mod telemetry;
