//! # Payment Server
//!
//! Wires the payment service: configuration, repository, service, HTTP server.

use commerce_app::{config::PaymentConfig, telemetry};
use commerce_hex::{PaymentService, inbound::PaymentServer};
use commerce_repo::build_repo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let otel_provider = telemetry::init_tracing("payment-service")?;

    let config = PaymentConfig::from_env()?;
    tracing::info!("Starting payment server on port {}", config.port);

    let repo = build_repo(&config.database_url).await?;
    let server = PaymentServer::new(PaymentService::new(repo));

    server.run(&config.bind_addr()).await?;

    telemetry::shutdown(otel_provider);
    Ok(())
}
