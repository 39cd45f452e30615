//! Configuration loading from environment.
//!
//! `.env` is loaded by the binaries before these are read.

use std::env;

pub const DEFAULT_SHOPPING_PORT: u16 = 9051;
pub const DEFAULT_PAYMENT_PORT: u16 = 9061;
pub const DEFAULT_PAYMENT_SERVICE_BASE_URI: &str = "http://localhost:9061";

/// Shopping service configuration.
#[derive(Debug, Clone)]
pub struct ShoppingConfig {
    pub port: u16,
    pub database_url: String,
    pub payment_service_base_uri: String,
}

impl ShoppingConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = parse_port(lookup("PORT_SHOPPING"), "PORT_SHOPPING", DEFAULT_SHOPPING_PORT)?;

        let database_url = lookup("SHOPPING_DATABASE_URL")
            .unwrap_or_else(|| default_database_url("shopping_db"));

        let payment_service_base_uri = lookup("PAYMENT_SERVICE_BASE_URI")
            .unwrap_or_else(|| DEFAULT_PAYMENT_SERVICE_BASE_URI.to_string());

        Ok(Self {
            port,
            database_url,
            payment_service_base_uri,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Payment service configuration.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub port: u16,
    pub database_url: String,
}

impl PaymentConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = parse_port(lookup("PORT_PAYMENT"), "PORT_PAYMENT", DEFAULT_PAYMENT_PORT)?;

        let database_url = lookup("PAYMENT_DATABASE_URL")
            .unwrap_or_else(|| default_database_url("payment_db"));

        Ok(Self { port, database_url })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<String>, key: &str, default: u16) -> anyhow::Result<u16> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{key} must be a port number, got {value:?}: {e}")),
        None => Ok(default),
    }
}

/// Local database named `name` for the compiled backend.
fn default_database_url(name: &str) -> String {
    if cfg!(feature = "postgres") {
        format!("postgres://localhost:5432/{name}")
    } else {
        format!("sqlite://data/{name}.sqlite?mode=rwc")
    }
}
