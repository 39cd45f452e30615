//! HTTP server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use commerce_types::{PaymentClient, PaymentRepository, ProductRepository, TransactionRepository};

use super::handlers::{self, payments, products, transactions};
use crate::openapi::{PaymentApiDoc, ShoppingApiDoc};
use crate::{PaymentService, ProductService, TransactionService};

const SWAGGER_PATH: &str = "/swagger-ui";
const OPENAPI_PATH: &str = "/api-docs/openapi.json";

// ─────────────────────────────────────────────────────────────────────────────
// Shopping service
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP server for the shopping API (products and transactions).
pub struct ShoppingServer<P, T, C>
where
    P: ProductRepository,
    T: TransactionRepository,
    C: PaymentClient,
{
    products: Arc<ProductService<P>>,
    transactions: Arc<TransactionService<T, C>>,
}

impl<P, T, C> ShoppingServer<P, T, C>
where
    P: ProductRepository,
    T: TransactionRepository,
    C: PaymentClient,
{
    pub fn new(products: ProductService<P>, transactions: TransactionService<T, C>) -> Self {
        Self {
            products: Arc::new(products),
            transactions: Arc::new(transactions),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        let products = Router::new()
            .route(
                "/products",
                post(products::create_product::<P>).get(products::list_products::<P>),
            )
            .route(
                "/products/{id}",
                get(products::get_product::<P>)
                    .put(products::update_product::<P>)
                    .delete(products::delete_product::<P>),
            )
            .with_state(self.products.clone());

        let transactions = Router::new()
            .route(
                "/transactions",
                post(transactions::create_transaction::<T, C>)
                    .get(transactions::list_transactions::<T, C>),
            )
            .route(
                "/transactions/{id}",
                get(transactions::get_transaction::<T, C>)
                    .put(transactions::update_transaction::<T, C>)
                    .delete(transactions::delete_transaction::<T, C>),
            )
            .with_state(self.transactions.clone());

        Router::new()
            .route("/health", get(handlers::health))
            .merge(products)
            .merge(transactions)
            .merge(SwaggerUi::new(SWAGGER_PATH).url(OPENAPI_PATH, ShoppingApiDoc::openapi()))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        serve(self.router(), addr, "shopping").await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment service
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP server for the payment API.
pub struct PaymentServer<R: PaymentRepository> {
    service: Arc<PaymentService<R>>,
}

impl<R: PaymentRepository> PaymentServer<R> {
    pub fn new(service: PaymentService<R>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        let payments = Router::new()
            .route("/payments", post(payments::create_payment::<R>))
            .with_state(self.service.clone());

        Router::new()
            .route("/health", get(handlers::health))
            .merge(payments)
            .merge(SwaggerUi::new(SWAGGER_PATH).url(OPENAPI_PATH, PaymentApiDoc::openapi()))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        serve(self.router(), addr, "payment").await
    }
}

async fn serve(router: Router, addr: &str, name: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("{} server listening on {}", name, listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
