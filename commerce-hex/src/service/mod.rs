//! Application services.
//!
//! Orchestrate domain operations through the ports.
//! Contains NO infrastructure logic - pure business orchestration.

mod payment;
mod product;
mod transaction;

pub use payment::PaymentService;
pub use product::ProductService;
pub use transaction::TransactionService;

use std::str::FromStr;

use commerce_types::AppError;

/// Parses a path or body identifier, naming it in the error when malformed.
pub(crate) fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidId(what.to_string()))
}
