//! # Shopping Server
//!
//! Wires the shopping service together:
//! - Load configuration from environment
//! - Initialize the repository adapter and the payment client
//! - Create the product and transaction services
//! - Start the HTTP server

use commerce_app::{config::ShoppingConfig, telemetry};
use commerce_hex::{ProductService, TransactionService, inbound::ShoppingServer};
use commerce_repo::build_repo;
use payment_client::HttpPaymentClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let otel_provider = telemetry::init_tracing("shopping-service")?;

    let config = ShoppingConfig::from_env()?;

    tracing::info!("Starting shopping server on port {}", config.port);
    tracing::info!("Payment service at {}", config.payment_service_base_uri);

    // Build repository (handles connection and schema)
    let repo = build_repo(&config.database_url).await?;
    let payments = HttpPaymentClient::new(config.payment_service_base_uri.as_str())?;

    let server = ShoppingServer::new(
        ProductService::new(repo.clone()),
        TransactionService::new(repo, payments),
    );

    server.run(&config.bind_addr()).await?;

    // Ensure traces are flushed before exit
    telemetry::shutdown(otel_provider);
    Ok(())
}
